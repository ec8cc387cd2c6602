use super::*;

struct FailingResponder;

impl CopilotResponder for FailingResponder {
    fn resolve(&self, _question: &str) -> Result<String, CopilotError> {
        Err(CopilotError::Unavailable("offline".to_owned()))
    }
}

struct BlankResponder;

impl CopilotResponder for BlankResponder {
    fn resolve(&self, _question: &str) -> Result<String, CopilotError> {
        Ok("   ".to_owned())
    }
}

// =============================================================
// CannedResponder
// =============================================================

#[test]
fn canned_refund_question_gets_refund_answer() {
    assert_eq!(CannedResponder.resolve("How do I get a refund?").unwrap(), REFUND_ANSWER);
}

#[test]
fn canned_late_return_question_gets_policy_answer() {
    assert_eq!(CannedResponder.resolve(LATE_RETURN_QUESTION).unwrap(), LATE_RETURN_ANSWER);
}

#[test]
fn canned_unknown_question_gets_default_answer() {
    assert_eq!(CannedResponder.resolve("Where is my parcel?").unwrap(), DEFAULT_ANSWER);
}

#[test]
fn canned_match_is_exact() {
    assert_eq!(CannedResponder.resolve("how do i get a refund?").unwrap(), DEFAULT_ANSWER);
    assert_eq!(CannedResponder.resolve("How do I get a refund? ").unwrap(), DEFAULT_ANSWER);
}

// =============================================================
// CopilotService
// =============================================================

#[test]
fn service_defaults_to_canned_table() {
    let service = CopilotService::default();
    assert_eq!(service.answer(REFUND_QUESTION).unwrap(), REFUND_ANSWER);
}

#[test]
fn service_propagates_responder_error() {
    let service = CopilotService::new(FailingResponder);
    assert_eq!(service.answer("anything"), Err(CopilotError::Unavailable("offline".to_owned())));
}

#[test]
fn service_rejects_blank_answer() {
    let service = CopilotService::new(BlankResponder);
    assert_eq!(service.answer("anything"), Err(CopilotError::EmptyAnswer));
}

// =============================================================
// CopilotState::submit
// =============================================================

#[test]
fn copilot_state_default_is_idle() {
    let state = CopilotState::default();
    assert!(state.is_empty());
    assert!(!state.is_generating());
}

#[test]
fn submit_creates_generating_exchange_with_sources() {
    let mut state = CopilotState::default();
    let id = state.submit("How do I get a refund?").unwrap();

    assert_eq!(id, "response-1");
    let exchange = &state.exchanges[0];
    assert!(exchange.generating);
    assert!(exchange.answer.is_empty());
    assert_eq!(exchange.sources, ["Getting a refund", "Refund for an order placed by mistake", "Refund for an unwanted gift"]);
    assert!(state.is_generating());
}

#[test]
fn submit_blank_question_is_noop() {
    let mut state = CopilotState::default();
    assert!(state.submit("").is_none());
    assert!(state.submit("  \n ").is_none());
    assert!(state.is_empty());
}

#[test]
fn submit_numbers_exchanges_sequentially() {
    let mut state = CopilotState::default();
    assert_eq!(state.submit("a").as_deref(), Some("response-1"));
    assert_eq!(state.submit("b").as_deref(), Some("response-2"));
    assert_eq!(state.exchanges.len(), 2);
}

// =============================================================
// CopilotState::resolve
// =============================================================

#[test]
fn resolve_success_stores_answer_and_clears_generating() {
    let mut state = CopilotState::default();
    let id = state.submit(REFUND_QUESTION).unwrap();

    assert!(state.resolve(&id, CannedResponder.resolve(REFUND_QUESTION)));
    assert_eq!(state.exchanges[0].answer, REFUND_ANSWER);
    assert!(!state.exchanges[0].generating);
    assert!(state.exchanges[0].error.is_none());
    assert!(!state.is_generating());
}

#[test]
fn resolve_failure_clears_generating_and_records_error() {
    let mut state = CopilotState::default();
    let id = state.submit("hello").unwrap();

    assert!(state.resolve(&id, Err(CopilotError::Unavailable("offline".to_owned()))));
    let exchange = &state.exchanges[0];
    assert!(!exchange.generating);
    assert!(exchange.answer.is_empty());
    assert_eq!(exchange.error.as_deref(), Some("copilot unavailable: offline"));
    assert!(!state.is_generating());
}

#[test]
fn resolve_only_applies_once() {
    let mut state = CopilotState::default();
    let id = state.submit("hello").unwrap();
    assert!(state.resolve(&id, Ok("first".to_owned())));
    assert!(!state.resolve(&id, Ok("second".to_owned())));
    assert_eq!(state.exchanges[0].answer, "first");
}

#[test]
fn resolve_unknown_id_is_ignored() {
    let mut state = CopilotState::default();
    state.submit("hello");
    assert!(!state.resolve("response-9", Ok("x".to_owned())));
    assert!(state.is_generating());
}

#[test]
fn concurrent_exchanges_resolve_independently() {
    let mut state = CopilotState::default();
    let first = state.submit(REFUND_QUESTION).unwrap();
    let second = state.submit("Something else").unwrap();

    state.resolve(&first, CannedResponder.resolve(REFUND_QUESTION));
    assert!(state.is_generating());

    state.resolve(&second, CannedResponder.resolve("Something else"));
    assert!(!state.is_generating());
    assert_eq!(state.exchanges[0].answer, REFUND_ANSWER);
    assert_eq!(state.exchanges[1].answer, DEFAULT_ANSWER);
}
