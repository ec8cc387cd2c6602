//! Single chat bubble with agent edit and customer ask-copilot affordances.

use leptos::prelude::*;

use crate::state::inbox::{Message, Sender};

#[cfg(test)]
#[path = "message_bubble_test.rs"]
mod message_bubble_test;

/// Keys that open the copilot from a focused customer bubble.
pub(crate) fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// One transcript message.
///
/// Customer bubbles are clickable (or Enter/Space) to ask the copilot about
/// them; agent bubbles carry an edit button that opens the rephrase tool.
#[component]
pub fn MessageBubble(message: Message, on_edit: Callback<String>, on_ask: Callback<Message>) -> impl IntoView {
    let is_agent = message.sender == Sender::Agent;
    let is_customer = message.sender == Sender::Customer;

    let open_copilot = {
        let message = message.clone();
        move || {
            if is_customer {
                on_ask.run(message.clone());
            }
        }
    };
    let open_copilot_key = open_copilot.clone();

    let edit_text = message.content.clone();
    let on_edit_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        on_edit.run(edit_text.clone());
    };

    let bubble_class = format!("message-bubble message-bubble--{}", message.sender.as_str());
    let tabindex = if is_customer { "0" } else { "-1" };
    let aria_label =
        if is_customer { "Customer message, click or press enter for Copilot" } else { "Agent message" };

    let avatar = message.avatar.clone();
    let avatar_view = move |class: &'static str| view! { <span class=class>{avatar.clone()}</span> };

    view! {
        <div class="message-row" class:message-row--agent=is_agent class:message-row--customer=is_customer>
            {is_customer.then(|| avatar_view("avatar avatar--customer"))}

            <div
                class=bubble_class
                data-sender=message.sender.as_str()
                tabindex=tabindex
                aria-label=aria_label
                on:click=move |_| open_copilot()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if is_customer && is_activation_key(&ev.key()) {
                        // Space would otherwise scroll the transcript.
                        ev.prevent_default();
                        open_copilot_key();
                    }
                }
            >
                <p class="message-bubble__content">{message.content.clone()}</p>
                <div class="message-bubble__meta">
                    <span class="message-bubble__time">{message.time.clone()}</span>
                    {is_agent
                        .then(|| {
                            view! {
                                <span class="message-bubble__agent-meta">
                                    <span class="message-bubble__seen">"Seen"</span>
                                    <button
                                        class="message-bubble__edit"
                                        type="button"
                                        aria-label="Edit message"
                                        on:click=on_edit_click.clone()
                                    >
                                        "✎"
                                    </button>
                                </span>
                            }
                        })}
                </div>
                {is_customer
                    .then(|| view! { <span class="message-bubble__hint">"Ask Copilot about this message"</span> })}
            </div>

            {is_agent.then(|| avatar_view("avatar avatar--agent"))}
        </div>
    }
}
