//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own. It server-renders the inbox through
//! Leptos, serves the compiled WASM/CSS bundle under `/pkg`, and answers a
//! liveness check at `/healthz`. Every SSR response renders the seed loaded
//! at startup.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use client::app::{App, shell};
use client::state::seed::EmbeddedSeed;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::AppError;

/// Body returned by `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub conversations: usize,
}

/// Leptos SSR frontend plus static bundle and health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(seed: Arc<EmbeddedSeed>) -> Result<Router, AppError> {
    let conf = get_configuration(None).map_err(|e| AppError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(|| view! { <App/> });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let seed = Arc::clone(&seed);
            move || shell(opts.clone(), (*seed).clone())
        })
        .with_state(leptos_options.clone());

    let health_router = Router::new().route("/healthz", get(healthz)).with_state(seed);

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(health_router
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

pub(crate) async fn healthz(State(seed): State<Arc<EmbeddedSeed>>) -> Json<Health> {
    Json(Health { status: "ok", conversations: seed.conversations.len() })
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
