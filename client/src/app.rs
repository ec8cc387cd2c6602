//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::inbox::InboxPage;
use crate::state::copilot::{CopilotService, CopilotState};
use crate::state::inbox::{Conversation, InboxState};
use crate::state::seed::{EmbeddedSeed, SEED_ELEMENT_ID};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The seed is rendered into the app and embedded as JSON for `hydrate()`.
pub fn shell(options: LeptosOptions, seed: EmbeddedSeed) -> impl IntoView {
    let EmbeddedSeed { conversations, script_json } = seed;
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <script type="application/json" id=SEED_ELEMENT_ID inner_html=script_json></script>
            </head>
            <body>
                <App conversations=conversations/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// Without `conversations` the store starts from the built-in seed.
#[component]
pub fn App(#[prop(optional)] conversations: Option<Vec<Conversation>>) -> impl IntoView {
    provide_meta_context();

    let inbox = RwSignal::new(conversations.map_or_else(InboxState::seeded, InboxState::new));
    let copilot = RwSignal::new(CopilotState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(inbox);
    provide_context(copilot);
    provide_context(ui);
    provide_context(CopilotService::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/helpdesk.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=InboxPage/>
            </Routes>
        </Router>
    }
}
