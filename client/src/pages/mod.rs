//! Route-level screens. The helpdesk has a single one: the three-pane inbox.

pub mod inbox;
