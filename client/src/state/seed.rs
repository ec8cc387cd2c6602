//! Built-in conversation seed and JSON seed loading.
//!
//! SYSTEM CONTEXT
//! ==============
//! The inbox has no backend. The host picks the seed (built-in or a JSON file
//! in the `Conversation` shape), renders with it, and embeds the same
//! conversations as a JSON `<script>` in the shell. Hydration reads that
//! script back, so server markup and client state start identical.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use std::collections::HashSet;

use super::inbox::{
    AGENT_AVATAR, Conversation, ConversationId, ConversationStatus, Message, MessageId, Sender, StatusTone,
};

/// Errors produced while loading a host-supplied seed.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate conversation id {0}")]
    DuplicateConversation(u32),

    #[error("conversation {conversation} has message id {found}, expected {expected}")]
    MessageSequence { conversation: u32, expected: u32, found: u32 },
}

/// Parse and validate a JSON array of conversations.
///
/// Message identifiers must run 1..=n within each conversation so that
/// identifiers assigned on send stay unique.
///
/// # Errors
///
/// Returns [`SeedError`] when the JSON is malformed, a conversation id
/// repeats, or message ids are out of sequence.
pub fn conversations_from_json(raw: &str) -> Result<Vec<Conversation>, SeedError> {
    let conversations: Vec<Conversation> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for conversation in &conversations {
        if !seen.insert(conversation.id) {
            return Err(SeedError::DuplicateConversation(conversation.id.0));
        }
        for (expected, message) in (1_u32..).zip(&conversation.messages) {
            if message.id.0 != expected {
                return Err(SeedError::MessageSequence {
                    conversation: conversation.id.0,
                    expected,
                    found: message.id.0,
                });
            }
        }
    }

    Ok(conversations)
}

/// DOM id of the `<script type="application/json">` carrying the seed.
pub const SEED_ELEMENT_ID: &str = "helpdesk-seed";

/// Conversations a host renders with, plus their script-safe JSON form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbeddedSeed {
    pub conversations: Vec<Conversation>,
    pub script_json: String,
}

impl EmbeddedSeed {
    /// Serialize `conversations` for embedding inside a `<script>` element.
    ///
    /// `</` is written as `<\/` so message text cannot close the element.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Json`] if serialization fails.
    pub fn new(conversations: Vec<Conversation>) -> Result<Self, SeedError> {
        let script_json = serde_json::to_string(&conversations)?.replace("</", "<\\/");
        Ok(Self { conversations, script_json })
    }
}

/// Conversations recovered from the embedded seed script.
///
/// A missing or invalid script falls back to [`default_conversations`],
/// which is what the host renders when no seed file is configured.
pub fn conversations_from_embedded(raw: Option<&str>) -> Vec<Conversation> {
    let Some(raw) = raw else {
        leptos::logging::warn!("seed script missing, using built-in conversations");
        return default_conversations();
    };
    match conversations_from_json(raw) {
        Ok(conversations) => conversations,
        Err(err) => {
            leptos::logging::warn!("seed script rejected: {err}");
            default_conversations()
        }
    }
}

fn customer(id: u32, avatar: &str, time: &str, content: &str) -> Message {
    Message {
        id: MessageId(id),
        sender: Sender::Customer,
        content: content.to_owned(),
        time: time.to_owned(),
        avatar: avatar.to_owned(),
    }
}

fn agent(id: u32, time: &str, content: &str) -> Message {
    Message {
        id: MessageId(id),
        sender: Sender::Agent,
        content: content.to_owned(),
        time: time.to_owned(),
        avatar: AGENT_AVATAR.to_owned(),
    }
}

fn status(label: &str, tone: StatusTone) -> Option<ConversationStatus> {
    Some(ConversationStatus { label: label.to_owned(), tone })
}

/// The three demo threads the inbox starts with.
#[must_use]
pub fn default_conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: ConversationId(1),
            name: "Emily Zhang".to_owned(),
            avatar: "EZ".to_owned(),
            subject: "Requesting refund for unopened product".to_owned(),
            status: status("Open", StatusTone::Green),
            time: "2m".to_owned(),
            unread: true,
            messages: vec![
                customer(
                    1,
                    "EZ",
                    "2:45 PM",
                    "Hello, I purchased a Bluetooth speaker from your store last month as a gift, but the recipient already has a similar one. It's unopened. Could I get a refund?",
                ),
                agent(
                    2,
                    "2:46 PM",
                    "Hi Emily, thank you for reaching out to Acme Corp support. Let me check your order details. Could you please provide your order number?",
                ),
                customer(3, "EZ", "2:46 PM", "Sure, the order number is #AC12345."),
                agent(
                    4,
                    "2:47 PM",
                    "Thank you! I see your order was placed 40 days ago and is eligible for a refund as long as the product is unopened. I’ll email you a return label shortly.",
                ),
                customer(5, "EZ", "2:48 PM", "Perfect, thank you for your help!"),
            ],
        },
        Conversation {
            id: ConversationId(2),
            name: "Rajat Verma".to_owned(),
            avatar: "RV".to_owned(),
            subject: "Product defect: screen flickering".to_owned(),
            status: status("Waiting request", StatusTone::Yellow),
            time: "8m".to_owned(),
            unread: false,
            messages: vec![
                customer(
                    1,
                    "RV",
                    "3:10 PM",
                    "Hi, I recently bought a SmartTab Pro from your website and the screen keeps flickering. Can you help?",
                ),
                agent(
                    2,
                    "3:11 PM",
                    "Hello Rajat, I’m sorry to hear about the issue. Could you share your order number or product serial number?",
                ),
                customer(3, "RV", "3:12 PM", "Yes, the serial number is STP-998877."),
                agent(
                    4,
                    "3:13 PM",
                    "Thank you. Since your device is under warranty, we can arrange a replacement or repair. Which would you prefer?",
                ),
                customer(5, "RV", "3:14 PM", "I’d like a replacement, please."),
                agent(
                    6,
                    "3:15 PM",
                    "No problem, Rajat. I’ll initiate the replacement and send you a prepaid shipping label for the return.",
                ),
            ],
        },
        Conversation {
            id: ConversationId(3),
            name: "Corporate Lead: FinEdge Ltd.".to_owned(),
            avatar: "FL".to_owned(),
            subject: "Request for enterprise pricing details".to_owned(),
            status: None,
            time: "1h".to_owned(),
            unread: true,
            messages: vec![
                customer(
                    1,
                    "FL",
                    "1:30 PM",
                    "Good afternoon, we’re evaluating your platform for our team at FinEdge Ltd. Could you share your enterprise pricing and feature details?",
                ),
                agent(
                    2,
                    "1:32 PM",
                    "Hello! Thank you for your interest in Acme Corp. I’ll send you a detailed proposal and can arrange a call to discuss your requirements in depth.",
                ),
            ],
        },
    ]
}
