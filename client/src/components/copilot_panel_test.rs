#![cfg(not(feature = "hydrate"))]

use leptos::prelude::*;

use super::ask_copilot;
use crate::state::copilot::{
    CopilotError, CopilotResponder, CopilotService, CopilotState, DEFAULT_ANSWER, REFUND_ANSWER, REFUND_QUESTION,
};

struct OfflineResponder;

impl CopilotResponder for OfflineResponder {
    fn resolve(&self, _question: &str) -> Result<String, CopilotError> {
        Err(CopilotError::Unavailable("offline".to_owned()))
    }
}

fn with_copilot(test: impl FnOnce(RwSignal<CopilotState>)) {
    let owner = Owner::new();
    owner.with(|| test(RwSignal::new(CopilotState::default())));
}

// =============================================================
// ask_copilot
// =============================================================

#[test]
fn refund_question_resolves_to_refund_answer() {
    with_copilot(|copilot| {
        assert!(ask_copilot(copilot, CopilotService::default(), REFUND_QUESTION));

        copilot.with_untracked(|c| {
            assert!(!c.is_generating());
            assert_eq!(c.exchanges.len(), 1);
            let exchange = &c.exchanges[0];
            assert_eq!(exchange.id, "response-1");
            assert_eq!(exchange.question, REFUND_QUESTION);
            assert_eq!(exchange.answer, REFUND_ANSWER);
            assert_eq!(exchange.error, None);
        });
    });
}

#[test]
fn unknown_question_gets_default_answer_in_order() {
    with_copilot(|copilot| {
        let service = CopilotService::default();
        assert!(ask_copilot(copilot, service.clone(), REFUND_QUESTION));
        assert!(ask_copilot(copilot, service, "Can I change my address?"));

        copilot.with_untracked(|c| {
            let ids: Vec<&str> = c.exchanges.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, ["response-1", "response-2"]);
            assert_eq!(c.exchanges[1].answer, DEFAULT_ANSWER);
        });
    });
}

#[test]
fn blank_question_records_nothing() {
    with_copilot(|copilot| {
        assert!(!ask_copilot(copilot, CopilotService::default(), "   "));
        assert!(copilot.with_untracked(CopilotState::is_empty));
    });
}

#[test]
fn responder_failure_is_recorded_not_left_generating() {
    with_copilot(|copilot| {
        assert!(ask_copilot(copilot, CopilotService::new(OfflineResponder), "Anything?"));

        copilot.with_untracked(|c| {
            assert!(!c.is_generating());
            assert_eq!(c.exchanges[0].answer, "");
            assert_eq!(c.exchanges[0].error.as_deref(), Some("copilot unavailable: offline"));
        });
    });
}
