//! Inbox page: the three-pane support workspace.
//!
//! ARCHITECTURE
//! ============
//! The page only lays out the panes. Each pane reads the shared state
//! contexts provided by `App`, so selection made in the list flows to the
//! transcript and the copilot details without props threading.

#[cfg(test)]
#[path = "inbox_test.rs"]
mod inbox_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::chat_window::ChatWindow;
use crate::components::copilot_panel::CopilotPanel;
use crate::components::inbox_sidebar::InboxSidebar;
use crate::state::inbox::InboxState;

const APP_TITLE: &str = "Helpdesk";

/// Browser tab title for the active conversation.
pub(crate) fn page_title(active_name: Option<&str>) -> String {
    match active_name {
        Some(name) => format!("{name} · {APP_TITLE}"),
        None => APP_TITLE.to_owned(),
    }
}

/// Inbox list, chat transcript, and copilot panel side by side.
#[component]
pub fn InboxPage() -> impl IntoView {
    let inbox = expect_context::<RwSignal<InboxState>>();

    let title = move || inbox.with(|s| page_title(s.selected().map(|c| c.name.as_str())));

    view! {
        <Title text=title/>
        <div class="inbox-page">
            <aside class="inbox-page__list">
                <InboxSidebar/>
            </aside>
            <main class="inbox-page__chat">
                <ChatWindow/>
            </main>
            <aside class="inbox-page__copilot">
                <CopilotPanel/>
            </aside>
        </div>
    }
}
