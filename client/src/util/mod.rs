//! Small helpers kept apart from components: wall-clock labels, deferred
//! callbacks, the hydration seed reader, and markdown for copilot answers.
//!
//! `clock`, `delay` and `embedded_seed` hide the browser/native split behind
//! `hydrate`, so callers never branch on the target themselves.

pub mod clock;
pub mod delay;
pub mod embedded_seed;
pub mod markdown;
