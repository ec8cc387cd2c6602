//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`inbox`, `copilot`, `editor`, etc.) so individual
//! components can depend on small focused models. Everything here is plain
//! Rust with no browser dependency, which keeps it testable natively.

pub mod copilot;
pub mod editor;
pub mod inbox;
pub mod seed;
pub mod ui;
