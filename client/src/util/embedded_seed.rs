//! Reads the seed script the server rendered into the shell.

#[cfg(test)]
#[path = "embedded_seed_test.rs"]
mod embedded_seed_test;

use crate::state::inbox::Conversation;
use crate::state::seed::conversations_from_embedded;

/// Conversations to hydrate with.
///
/// Outside the browser there is no document, so this yields the built-in seed.
pub fn read_embedded_seed() -> Vec<Conversation> {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::seed::SEED_ELEMENT_ID;

        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(SEED_ELEMENT_ID))
            .and_then(|element| element.text_content());
        conversations_from_embedded(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        conversations_from_embedded(None)
    }
}
