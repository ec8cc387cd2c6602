//! Conversation store and active-selection state for the support inbox.
//!
//! DESIGN
//! ======
//! The store owns every conversation and is only ever mutated by appending
//! messages. The active conversation is not kept as a second copy: the state
//! records the selected identifier and resolves it against the store on every
//! read, so the inbox list and the transcript cannot disagree.

#[cfg(test)]
#[path = "inbox_test.rs"]
mod inbox_test;

use serde::{Deserialize, Serialize};

/// Status label that counts toward the inbox header "Open" chip.
pub const OPEN_STATUS_LABEL: &str = "Open";

/// Avatar initials used for messages sent from this inbox.
pub const AGENT_AVATAR: &str = "A";

/// Conversation identifier, stable for the lifetime of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(pub u32);

/// Message identifier, unique within its parent conversation only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u32);

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Customer,
    Agent,
}

impl Sender {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Agent => "agent",
        }
    }
}

/// Color tag shown next to a status label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Green,
    Yellow,
}

impl StatusTone {
    /// CSS modifier suffix for the status dot.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationStatus {
    pub label: String,
    pub tone: StatusTone,
}

/// A single chat message. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub content: String,
    pub time: String,
    pub avatar: String,
}

/// A customer-support thread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub name: String,
    pub avatar: String,
    pub subject: String,
    #[serde(default)]
    pub status: Option<ConversationStatus>,
    pub time: String,
    #[serde(default)]
    pub unread: bool,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Identifier the next appended message will receive.
    #[must_use]
    pub fn next_message_id(&self) -> MessageId {
        MessageId(u32::try_from(self.messages.len()).map_or(u32::MAX, |count| count.saturating_add(1)))
    }

    #[must_use]
    pub fn status_label(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.label.as_str())
    }
}

/// Inbox store plus the identifier of the active conversation.
///
/// Held in a `RwSignal` provided through Leptos context.
#[derive(Clone, Debug, Default)]
pub struct InboxState {
    conversations: Vec<Conversation>,
    selected_id: Option<ConversationId>,
}

impl InboxState {
    /// Build a store with the first conversation selected.
    #[must_use]
    pub fn new(conversations: Vec<Conversation>) -> Self {
        let selected_id = conversations.first().map(|c| c.id);
        Self { conversations, selected_id }
    }

    /// Store populated from the built-in seed threads.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(super::seed::default_conversations())
    }

    #[must_use]
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<ConversationId> {
        self.selected_id
    }

    /// The active conversation, looked up from the store.
    ///
    /// Returns `None` when nothing is selected or the selected identifier
    /// does not name a stored conversation.
    #[must_use]
    pub fn selected(&self) -> Option<&Conversation> {
        let id = self.selected_id?;
        self.conversation(id)
    }

    #[must_use]
    pub fn conversation(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn is_selected(&self, id: ConversationId) -> bool {
        self.selected_id == Some(id)
    }

    /// Replace the selection. The identifier is not validated.
    pub fn select(&mut self, id: ConversationId) {
        self.selected_id = Some(id);
    }

    /// Append `message` to the matching conversation.
    ///
    /// Returns `false` when no conversation has `conversation_id`.
    pub fn append_message(&mut self, conversation_id: ConversationId, message: Message) -> bool {
        let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == conversation_id) else {
            return false;
        };
        conversation.messages.push(message);
        true
    }

    /// Append an outgoing agent message built from composer text.
    ///
    /// Blank content is ignored. The content is stored exactly as typed.
    pub fn send_agent_message(
        &mut self,
        conversation_id: ConversationId,
        content: &str,
        time: impl Into<String>,
    ) -> Option<MessageId> {
        if content.trim().is_empty() {
            return None;
        }
        let id = self.conversation(conversation_id)?.next_message_id();
        let message = Message {
            id,
            sender: Sender::Agent,
            content: content.to_owned(),
            time: time.into(),
            avatar: AGENT_AVATAR.to_owned(),
        };
        self.append_message(conversation_id, message).then_some(id)
    }

    /// Number of conversations whose status reads "Open".
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.conversations
            .iter()
            .filter(|c| c.status_label() == Some(OPEN_STATUS_LABEL))
            .count()
    }
}
