//! Inbox panes and overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! `inbox_sidebar`, `chat_window` and `copilot_panel` are the three panes
//! mounted by `pages::inbox`. The remaining modules are pieces those panes
//! compose: message bubbles, the rephrase editor, and the ask-copilot modal.
//! All of them reach shared stores via `expect_context`.

pub mod ask_copilot_modal;
pub mod chat_window;
pub mod copilot_panel;
pub mod inbox_sidebar;
pub mod message_bubble;
pub mod text_editor;
