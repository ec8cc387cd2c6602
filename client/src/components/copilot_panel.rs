//! AI copilot side panel: question transcript plus conversation details.
//!
//! SYSTEM CONTEXT
//! ==============
//! Questions are recorded in `CopilotState` immediately and answered by the
//! injected `CopilotService` after `COPILOT_RESPONSE_DELAY`. Each question
//! gets its own timer; nothing cancels one once started.

use leptos::prelude::*;

use crate::state::copilot::{COPILOT_RESPONSE_DELAY, CopilotExchange, CopilotService, CopilotState, SUGGESTED_PROMPT};
use crate::state::inbox::InboxState;
use crate::state::ui::{CopilotTab, UiState};
use crate::util::delay::run_after;
use crate::util::markdown::render_markdown_html;

#[cfg(test)]
#[path = "copilot_panel_test.rs"]
mod copilot_panel_test;

/// Record `question` and schedule its simulated answer.
///
/// Returns `false` when the question was blank and nothing was recorded.
pub(crate) fn ask_copilot(copilot: RwSignal<CopilotState>, service: CopilotService, question: &str) -> bool {
    let mut submitted = None;
    copilot.update(|c| submitted = c.submit(question));
    let Some(id) = submitted else {
        return false;
    };

    let question = question.to_owned();
    run_after(COPILOT_RESPONSE_DELAY, move || {
        let outcome = service.answer(&question);
        copilot.update(|c| {
            c.resolve(&id, outcome);
        });
    });
    true
}

/// Right pane with the copilot transcript and a details tab.
#[component]
pub fn CopilotPanel() -> impl IntoView {
    let inbox = expect_context::<RwSignal<InboxState>>();
    let copilot = expect_context::<RwSignal<CopilotState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let service = StoredValue::new(expect_context::<CopilotService>());

    let question = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let transcript_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = copilot.with(|c| (c.exchanges.len(), c.is_generating()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = transcript_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    Effect::new(move || {
        let state = ui.get();
        let _ = state.copilot_focus_seq;
        if state.copilot_tab == CopilotTab::Copilot {
            #[cfg(feature = "hydrate")]
            {
                if let Some(input_el) = input_ref.get() {
                    let _ = input_el.focus();
                }
            }
        }
    });

    let generating = move || copilot.with(CopilotState::is_generating);
    let can_send = move || !question.with(|q| q.trim().is_empty()) && !generating();

    let submit = move |text: String| {
        if ask_copilot(copilot, service.get_value(), &text) {
            question.set(String::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(question.get());
    };

    let active_tab = move || ui.with(|u| u.copilot_tab);

    view! {
        <div class="copilot-panel">
            <div class="copilot-panel__tabs" role="tablist">
                {CopilotTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="copilot-panel__tab"
                                class:copilot-panel__tab--active=move || active_tab() == tab
                                role="tab"
                                type="button"
                                on:click=move |_| ui.update(|u| u.copilot_tab = tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="copilot-panel__content" node_ref=transcript_ref>
                {move || match active_tab() {
                    CopilotTab::Copilot => {
                        if copilot.with(CopilotState::is_empty) {
                            return view! {
                                <div class="copilot-panel__welcome">
                                    <div class="copilot-panel__bot-icon" aria-hidden="true">"🤖"</div>
                                    <h2 class="copilot-panel__welcome-title">"Hi, I’m Fin AI Copilot"</h2>
                                    <p class="copilot-panel__welcome-text">"Ask me anything about this conversation."</p>
                                    <button
                                        class="copilot-panel__suggestion"
                                        type="button"
                                        on:click=move |_| submit(SUGGESTED_PROMPT.to_owned())
                                    >
                                        <span aria-hidden="true">"💡"</span>
                                        {SUGGESTED_PROMPT}
                                    </button>
                                </div>
                            }
                                .into_any();
                        }

                        let exchanges = copilot.with(|c| c.exchanges.clone());
                        view! {
                            <div class="copilot-panel__transcript">
                                {exchanges
                                    .into_iter()
                                    .map(|exchange| view! { <ExchangeView exchange=exchange/> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                    CopilotTab::Details => view! { <ConversationDetails inbox=inbox/> }.into_any(),
                }}
            </div>

            <Show when=move || active_tab() == CopilotTab::Copilot>
                <form class="copilot-panel__input-row" on:submit=on_submit>
                    <input
                        class="copilot-panel__input"
                        type="text"
                        placeholder="Type your message…"
                        node_ref=input_ref
                        disabled=generating
                        prop:value=move || question.get()
                        on:input=move |ev| question.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn--primary copilot-panel__send"
                        type="submit"
                        aria-label="Ask Copilot"
                        disabled=move || !can_send()
                    >
                        "→"
                    </button>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn ExchangeView(exchange: CopilotExchange) -> impl IntoView {
    let body = if exchange.generating {
        view! {
            <div class="copilot-panel__generating">
                <span class="copilot-panel__spinner"></span>
                <span>"Generating response..."</span>
            </div>
        }
            .into_any()
    } else if let Some(error) = exchange.error {
        view! {
            <p class="copilot-panel__error">"Couldn’t generate a response. " <span>{error}</span></p>
        }
            .into_any()
    } else {
        let rendered = render_markdown_html(&exchange.answer);
        let sources = exchange.sources;
        view! {
            <div class="copilot-panel__answer" inner_html=rendered></div>
            {(!sources.is_empty())
                .then(|| {
                    view! {
                        <div class="copilot-panel__sources">
                            {sources
                                .into_iter()
                                .map(|source| view! { <span class="copilot-panel__source">{source}</span> })
                                .collect_view()}
                        </div>
                    }
                })}
        }
            .into_any()
    };

    view! {
        <div class="copilot-panel__exchange">
            <div class="copilot-panel__question">{exchange.question}</div>
            <div class="copilot-panel__reply">
                <span class="copilot-panel__reply-icon" aria-hidden="true">"🤖"</span>
                <div class="copilot-panel__reply-body">{body}</div>
            </div>
        </div>
    }
}

#[component]
fn ConversationDetails(inbox: RwSignal<InboxState>) -> impl IntoView {
    move || {
        let Some(conversation) = inbox.with(|s| s.selected().cloned()) else {
            return view! { <div class="copilot-panel__details-empty">"No conversation selected"</div> }.into_any();
        };
        let status = conversation.status.map(|s| s.label).unwrap_or_default();

        view! {
            <div class="copilot-panel__details">
                <h4 class="copilot-panel__details-title">"Conversation Details"</h4>
                <dl class="copilot-panel__details-list">
                    <dt>"Customer:"</dt>
                    <dd>{conversation.name}</dd>
                    <dt>"Status:"</dt>
                    <dd><span class="badge">{status}</span></dd>
                    <dt>"Last activity:"</dt>
                    <dd>{conversation.time}</dd>
                </dl>
            </div>
        }
            .into_any()
    }
}
