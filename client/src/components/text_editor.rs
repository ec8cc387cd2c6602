//! Full-screen message editor with the rephrase menu.

use leptos::prelude::*;

use crate::state::editor::{EditorState, REPHRASE_DELAY, RephraseOption};
use crate::util::delay::run_after;

/// Editor overlay. `on_apply` receives the staged text; `on_close` discards it.
#[component]
pub fn TextEditor(text: String, on_close: Callback<()>, on_apply: Callback<String>) -> impl IntoView {
    let editor = RwSignal::new(EditorState::open(&text));
    let processing = move || editor.with(|e| e.processing);

    let on_rephrase = move |option: RephraseOption| {
        let mut started = false;
        editor.update(|e| started = e.begin_rephrase());
        if !started {
            return;
        }
        // The overlay may be closed before the delay elapses.
        run_after(REPHRASE_DELAY, move || {
            let _ = editor.try_update(|e| e.finish_rephrase(option));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && !processing() {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="text-editor" on:keydown=on_keydown>
            <div class="text-editor__header">
                <div class="text-editor__title">
                    <span class="text-editor__icon" aria-hidden="true">"✨"</span>
                    <h3>"Edit Message"</h3>
                </div>
                <button class="text-editor__close" type="button" aria-label="Close editor" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
            </div>

            <div class="text-editor__main">
                <div class="text-editor__options">
                    <h4 class="text-editor__options-title">"Rephrase Options"</h4>
                    {RephraseOption::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class="text-editor__option"
                                    type="button"
                                    disabled=processing
                                    on:click=move |_| on_rephrase(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <textarea
                    class="text-editor__textarea"
                    placeholder="Start typing your message..."
                    disabled=processing
                    prop:value=move || editor.with(|e| e.staged.clone())
                    on:input=move |ev| editor.update(|e| e.set_staged(event_target_value(&ev)))
                ></textarea>
            </div>

            <div class="text-editor__footer">
                <button class="btn" type="button" disabled=processing on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class="btn btn--primary"
                    type="button"
                    disabled=processing
                    on:click=move |_| on_apply.run(editor.with_untracked(|e| e.staged.clone()))
                >
                    {move || editor.with(EditorState::apply_label)}
                </button>
            </div>
        </div>
    }
}
