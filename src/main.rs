#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod seed;

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    // Optional .env for local runs.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "helpdesk host stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = HostConfig::from_env()?;
    let seed = Arc::new(seed::load_seed(config.seed_file.as_deref())?);
    let conversations = seed.conversations.len();
    let app = routes::leptos_app(seed)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;

    tracing::info!(
        %addr,
        conversations,
        seed_file = ?config.seed_file,
        "helpdesk listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
