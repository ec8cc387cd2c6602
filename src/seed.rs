//! Conversation seed the host renders and embeds for hydration.

use std::path::Path;

use client::state::seed::{EmbeddedSeed, conversations_from_json, default_conversations};

use crate::error::AppError;

/// Load the seed from `path`, or the built-in threads when `None`.
///
/// # Errors
///
/// Returns [`AppError::SeedRead`] if the file cannot be read and
/// [`AppError::Seed`] if its contents are not a valid conversation list.
pub fn load_seed(path: Option<&Path>) -> Result<EmbeddedSeed, AppError> {
    let conversations = match path {
        None => default_conversations(),
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|source| AppError::SeedRead { path: path.to_path_buf(), source })?;
            conversations_from_json(&raw)?
        }
    };
    Ok(EmbeddedSeed::new(conversations)?)
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
