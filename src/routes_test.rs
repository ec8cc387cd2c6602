use super::*;

use client::state::inbox::Conversation;
use client::state::seed::default_conversations;

fn seed_state(conversations: Vec<Conversation>) -> State<Arc<EmbeddedSeed>> {
    State(Arc::new(EmbeddedSeed::new(conversations).unwrap()))
}

#[tokio::test]
async fn healthz_reports_ok_with_seed_count() {
    let Json(body) = healthz(seed_state(default_conversations())).await;
    assert_eq!(body, Health { status: "ok", conversations: 3 });
}

#[tokio::test]
async fn healthz_counts_loaded_seed() {
    let mut conversations = default_conversations();
    conversations.truncate(1);
    let Json(body) = healthz(seed_state(conversations)).await;
    assert_eq!(body.conversations, 1);
}

#[tokio::test]
async fn healthz_serializes_as_flat_json() {
    let Json(body) = healthz(seed_state(default_conversations())).await;
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value, serde_json::json!({ "status": "ok", "conversations": 3 }));
}
