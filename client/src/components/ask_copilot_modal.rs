//! Modal for asking the copilot a follow-up about one customer message.

use leptos::prelude::*;

use crate::components::copilot_panel::ask_copilot;
use crate::state::copilot::{CopilotService, CopilotState};
use crate::state::inbox::Message;
use crate::state::ui::UiState;

/// Shows the quoted message and forwards a non-empty question to the copilot panel.
#[component]
pub fn AskCopilotModal(message: Message, on_close: Callback<()>) -> impl IntoView {
    let copilot = expect_context::<RwSignal<CopilotState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let service = StoredValue::new(expect_context::<CopilotService>());
    let question = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = question.get();
        if ask_copilot(copilot, service.get_value(), &text) {
            leptos::logging::log!("copilot follow-up: {text}");
            ui.update(UiState::focus_copilot);
            question.set(String::new());
            on_close.run(());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog ask-copilot" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown>
                <div class="ask-copilot__header">
                    <span aria-hidden="true">"🤖"</span>
                    <span class="ask-copilot__title">"Ask Fin Copilot"</span>
                    <button class="ask-copilot__close" type="button" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>

                <div class="ask-copilot__quote">
                    <p class="ask-copilot__content">{message.content}</p>
                    <p class="ask-copilot__time">
                        <span aria-hidden="true">"📅"</span>
                        {message.time}
                    </p>
                </div>

                <form class="ask-copilot__form" on:submit=on_submit>
                    <input
                        class="ask-copilot__input"
                        type="text"
                        placeholder="Ask a follow up question..."
                        autofocus=true
                        prop:value=move || question.get()
                        on:input=move |ev| question.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn--primary ask-copilot__send"
                        type="submit"
                        disabled=move || question.with(|q| q.trim().is_empty())
                    >
                        "↑"
                    </button>
                </form>
            </div>
        </div>
    }
}
