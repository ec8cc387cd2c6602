//! Inbox list: every conversation with selection highlighting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared `InboxState` and writes only the selection. The active
//! row is found by identifier comparison, never by comparing copies.

use leptos::prelude::*;

use crate::state::inbox::{Conversation, InboxState};

/// Left pane listing conversations.
#[component]
pub fn InboxSidebar() -> impl IntoView {
    let inbox = expect_context::<RwSignal<InboxState>>();

    let open_label = move || format!("{} Open", inbox.with(InboxState::open_count));

    view! {
        <div class="inbox-sidebar">
            <div class="inbox-sidebar__header">
                <div class="inbox-sidebar__title-row">
                    <h2 class="inbox-sidebar__title">"Your inbox"</h2>
                    <span class="avatar avatar--muted" aria-hidden="true">"👤"</span>
                </div>
                <div class="inbox-sidebar__filters">
                    <button class="inbox-sidebar__filter inbox-sidebar__filter--active" type="button">
                        {open_label}
                        <span class="inbox-sidebar__chevron">"▾"</span>
                    </button>
                    <button class="inbox-sidebar__filter" type="button">
                        "Waiting longest"
                        <span class="inbox-sidebar__chevron">"▾"</span>
                    </button>
                </div>
            </div>

            <div class="inbox-sidebar__list">
                {move || {
                    let state = inbox.get();
                    state
                        .conversations()
                        .iter()
                        .map(|conversation| {
                            let selected = state.is_selected(conversation.id);
                            view! { <InboxRow conversation=conversation.clone() selected=selected/> }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn InboxRow(conversation: Conversation, selected: bool) -> impl IntoView {
    let inbox = expect_context::<RwSignal<InboxState>>();
    let id = conversation.id;

    let status = conversation.status.map(|status| {
        let dot_class = format!("status-dot status-dot--{}", status.tone.css_modifier());
        view! {
            <div class="inbox-sidebar__status">
                <span class=dot_class></span>
                <span class="inbox-sidebar__status-label">{status.label}</span>
            </div>
        }
    });

    view! {
        <button
            class="inbox-sidebar__item"
            class:inbox-sidebar__item--selected=selected
            type="button"
            aria-current=selected.then_some("true")
            on:click=move |_| inbox.update(|s| s.select(id))
        >
            <span class="avatar avatar--customer">{conversation.avatar}</span>
            <div class="inbox-sidebar__body">
                <div class="inbox-sidebar__name-row">
                    <span class="inbox-sidebar__name">{conversation.name}</span>
                    <span class="inbox-sidebar__time">{conversation.time}</span>
                </div>
                <div class="inbox-sidebar__subject-row">
                    {conversation.unread.then(|| view! { <span class="inbox-sidebar__unread" title="Unread"></span> })}
                    <span class="inbox-sidebar__subject">{conversation.subject}</span>
                </div>
                {status}
            </div>
        </button>
    }
}
