use super::*;

use client::state::seed::SeedError;

const TWO_THREADS: &str = r#"[
    {"id": 7, "name": "Ana Ortiz", "avatar": "AO", "subject": "Late delivery", "time": "5m", "unread": true,
     "status": {"label": "Open", "tone": "green"},
     "messages": [{"id": 1, "sender": "customer", "content": "Where is it?", "time": "9:00 AM", "avatar": "AO"}]},
    {"id": 8, "name": "Ben Cole", "avatar": "BC", "subject": "Invoice", "time": "1h"}
]"#;

#[test]
fn load_seed_without_path_uses_builtin_threads() {
    let seed = load_seed(None).unwrap();
    assert_eq!(seed.conversations, default_conversations());
}

#[test]
fn load_seed_reads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    std::fs::write(&path, TWO_THREADS).unwrap();

    let seed = load_seed(Some(&path)).unwrap();
    let names: Vec<&str> = seed.conversations.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Ana Ortiz", "Ben Cole"]);
    assert_eq!(conversations_from_json(&seed.script_json).unwrap(), seed.conversations);
}

#[test]
fn load_seed_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_seed(Some(&path)).unwrap_err();
    assert!(matches!(err, AppError::SeedRead { path: ref p, .. } if *p == path));
}

#[test]
fn load_seed_maps_invalid_seed_into_app_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dupes.json");
    std::fs::write(
        &path,
        r#"[{"id":1,"name":"A","avatar":"A","subject":"s","time":"t"},
            {"id":1,"name":"B","avatar":"B","subject":"s","time":"t"}]"#,
    )
    .unwrap();

    let err = load_seed(Some(&path)).unwrap_err();
    assert!(matches!(err, AppError::Seed(SeedError::DuplicateConversation(1))));
    assert_eq!(err.to_string(), "invalid seed: duplicate conversation id 1");
}
