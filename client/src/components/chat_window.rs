//! Chat transcript for the active conversation plus the reply composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transcript is derived from `InboxState::selected()` on every render,
//! so a sent message shows up here and in the store in the same update.

use leptos::prelude::*;

use crate::components::ask_copilot_modal::AskCopilotModal;
use crate::components::message_bubble::MessageBubble;
use crate::components::text_editor::TextEditor;
use crate::state::inbox::{InboxState, Message};
use crate::util::clock::now_label;

/// Middle pane: header, transcript, composer, and the edit/ask overlays.
#[component]
pub fn ChatWindow() -> impl IntoView {
    let inbox = expect_context::<RwSignal<InboxState>>();

    let draft = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<String>);
    let asking = RwSignal::new(None::<Message>);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = inbox.with(|s| s.selected().map(|c| (c.id, c.messages.len())));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(conversation_id) = inbox.with_untracked(InboxState::selected_id) else {
            return;
        };
        let text = draft.get_untracked();
        let mut sent = None;
        inbox.update(|s| sent = s.send_agent_message(conversation_id, &text, now_label()));
        if sent.is_some() {
            draft.set(String::new());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_edit = Callback::new(move |text: String| editing.set(Some(text)));
    let on_ask = Callback::new(move |message: Message| asking.set(Some(message)));
    let on_editor_close = Callback::new(move |()| editing.set(None));
    let on_editor_apply = Callback::new(move |text: String| {
        draft.set(text);
        editing.set(None);
    });
    let on_ask_close = Callback::new(move |()| asking.set(None));

    let has_selection = move || inbox.with(|s| s.selected().is_some());
    let can_send = move || !draft.with(|d| d.trim().is_empty());

    view! {
        <div class="chat-window">
            {move || {
                let Some(conversation) = inbox.with(|s| s.selected().cloned()) else {
                    return view! {
                        <div class="chat-window__empty">
                            <p>"No conversation selected"</p>
                        </div>
                    }
                        .into_any();
                };

                view! {
                    <div class="chat-window__header">
                        <div class="chat-window__identity">
                            <span class="avatar avatar--customer">{conversation.avatar.clone()}</span>
                            <div>
                                <h3 class="chat-window__name">{conversation.name.clone()}</h3>
                                {conversation
                                    .status_label()
                                    .map(|label| view! { <span class="chat-window__status">{label.to_owned()}</span> })}
                            </div>
                        </div>
                        <div class="chat-window__actions">
                            <button class="btn btn--ghost" type="button" aria-label="More actions">"⋯"</button>
                        </div>
                    </div>
                    <div class="chat-window__messages" node_ref=messages_ref>
                        {conversation
                            .messages
                            .into_iter()
                            .map(|message| view! { <MessageBubble message=message on_edit=on_edit on_ask=on_ask/> })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}

            <Show when=has_selection>
                <div class="chat-window__composer">
                    <textarea
                        class="chat-window__input"
                        rows="1"
                        placeholder="Type your message..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    ></textarea>
                    <button class="btn btn--ghost" type="button" aria-label="Attach file">"📎"</button>
                    <button class="btn btn--ghost" type="button" aria-label="Insert emoji">"☺"</button>
                    <button
                        class="btn btn--primary chat-window__send"
                        type="button"
                        aria-label="Send message"
                        disabled=move || !can_send()
                        on:click=move |_| do_send()
                    >
                        "➤"
                    </button>
                </div>
            </Show>

            {move || {
                editing
                    .get()
                    .map(|text| view! { <TextEditor text=text on_close=on_editor_close on_apply=on_editor_apply/> })
            }}
            {move || {
                asking.get().map(|message| view! { <AskCopilotModal message=message on_close=on_ask_close/> })
            }}
        </div>
    }
}
