//! # client
//!
//! Leptos + WASM frontend for the support inbox: conversation list, chat
//! transcript, and a simulated AI copilot side panel.
//!
//! Behavior lives in the plain-Rust `state` modules; `components` and
//! `pages` render that state and translate DOM events into state updates.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    let conversations = util::embedded_seed::read_embedded_seed();
    log::info!("hydrating helpdesk inbox with {} conversations", conversations.len());
    leptos::mount::hydrate_body(move || view! { <App conversations=conversations.clone()/> });
}
