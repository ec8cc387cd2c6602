//! AI copilot side-panel state and the simulated answer policy.
//!
//! DESIGN
//! ======
//! Each submitted question becomes an exchange that starts out generating and
//! is resolved exactly once. Answer lookup sits behind [`CopilotResponder`] so
//! the canned table can be swapped for a real backend without touching the
//! panel; the panel only schedules the delay and applies the outcome.

#[cfg(test)]
#[path = "copilot_test.rs"]
mod copilot_test;

use std::sync::Arc;
use std::time::Duration;

/// Artificial latency before a copilot answer appears.
pub const COPILOT_RESPONSE_DELAY: Duration = Duration::from_millis(1500);

/// Knowledge-base article titles cited under every answer.
pub const RELEVANT_SOURCES: &[&str] = &[
    "Getting a refund",
    "Refund for an order placed by mistake",
    "Refund for an unwanted gift",
    "Return policy guidelines",
    "Order tracking information",
];

/// Number of [`RELEVANT_SOURCES`] attached to an exchange.
pub const CITED_SOURCE_COUNT: usize = 3;

/// Prompt offered as a one-click chip while the transcript is empty.
pub const SUGGESTED_PROMPT: &str = "How do I get a refund?";

pub const REFUND_QUESTION: &str = "How do I get a refund?";
pub const REFUND_ANSWER: &str = "We understand that sometimes a purchase may not meet your expectations, and you may need to request a refund.\n\nTo assist you with your refund request, could you please provide your order ID and proof of purchase.";

pub const LATE_RETURN_QUESTION: &str = "What if the order was over 60 days ago?";
pub const LATE_RETURN_ANSWER: &str = "I understand your concern about the 60-day policy. While our standard policy is 60 days, we do review exceptions on a case-by-case basis. Let me check what options might be available for your specific situation.";

pub const DEFAULT_ANSWER: &str =
    "I'd be happy to help you with that question. Let me gather some relevant information for you.";

/// Errors a responder can report instead of an answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CopilotError {
    #[error("copilot unavailable: {0}")]
    Unavailable(String),

    #[error("copilot returned an empty answer")]
    EmptyAnswer,
}

/// Capability that turns a question into an answer.
pub trait CopilotResponder {
    /// Resolve `question` to answer text.
    ///
    /// # Errors
    ///
    /// Returns [`CopilotError`] when no answer can be produced.
    fn resolve(&self, question: &str) -> Result<String, CopilotError>;
}

/// Fixed question table with a catch-all answer. Never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct CannedResponder;

impl CopilotResponder for CannedResponder {
    fn resolve(&self, question: &str) -> Result<String, CopilotError> {
        let answer = match question {
            REFUND_QUESTION => REFUND_ANSWER,
            LATE_RETURN_QUESTION => LATE_RETURN_ANSWER,
            _ => DEFAULT_ANSWER,
        };
        Ok(answer.to_owned())
    }
}

/// Shareable handle to the responder, provided through Leptos context.
#[derive(Clone)]
pub struct CopilotService(Arc<dyn CopilotResponder + Send + Sync>);

impl CopilotService {
    pub fn new(responder: impl CopilotResponder + Send + Sync + 'static) -> Self {
        Self(Arc::new(responder))
    }

    /// Resolve `question`, treating a blank answer as a failure.
    ///
    /// # Errors
    ///
    /// Propagates the responder's error, or [`CopilotError::EmptyAnswer`].
    pub fn answer(&self, question: &str) -> Result<String, CopilotError> {
        let answer = self.0.resolve(question)?;
        if answer.trim().is_empty() {
            return Err(CopilotError::EmptyAnswer);
        }
        Ok(answer)
    }
}

impl Default for CopilotService {
    fn default() -> Self {
        Self::new(CannedResponder)
    }
}

impl std::fmt::Debug for CopilotService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopilotService").finish_non_exhaustive()
    }
}

/// One question/answer pair in the copilot transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopilotExchange {
    pub id: String,
    pub question: String,
    /// Empty until resolved.
    pub answer: String,
    pub sources: Vec<String>,
    pub generating: bool,
    /// Set when the responder failed.
    pub error: Option<String>,
}

/// Transcript state for the copilot panel.
#[derive(Clone, Debug, Default)]
pub struct CopilotState {
    pub exchanges: Vec<CopilotExchange>,
}

impl CopilotState {
    /// Record a new question as a generating exchange.
    ///
    /// Returns the exchange id to resolve later, or `None` for blank input.
    /// The question is kept exactly as typed.
    pub fn submit(&mut self, question: &str) -> Option<String> {
        if question.trim().is_empty() {
            return None;
        }
        let id = format!("response-{}", self.exchanges.len() + 1);
        self.exchanges.push(CopilotExchange {
            id: id.clone(),
            question: question.to_owned(),
            answer: String::new(),
            sources: RELEVANT_SOURCES
                .iter()
                .take(CITED_SOURCE_COUNT)
                .map(|s| (*s).to_owned())
                .collect(),
            generating: true,
            error: None,
        });
        Some(id)
    }

    /// Apply the outcome for exchange `id`.
    ///
    /// Returns `false` if the exchange is unknown or already resolved.
    pub fn resolve(&mut self, id: &str, outcome: Result<String, CopilotError>) -> bool {
        let Some(exchange) = self.exchanges.iter_mut().find(|e| e.id == id && e.generating) else {
            return false;
        };
        exchange.generating = false;
        match outcome {
            Ok(answer) => exchange.answer = answer,
            Err(err) => {
                leptos::logging::warn!("copilot answer failed: id={id} error={err}");
                exchange.error = Some(err.to_string());
            }
        }
        true
    }

    /// Whether any exchange is still waiting on its answer.
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.exchanges.iter().any(|e| e.generating)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}
