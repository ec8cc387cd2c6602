use super::*;

// =============================================================
// RephraseOption
// =============================================================

#[test]
fn menu_lists_five_options_in_order() {
    let labels: Vec<&str> = RephraseOption::ALL.iter().map(|o| o.label()).collect();
    assert_eq!(
        labels,
        ["My tone of voice", "More friendly", "More formal", "Fix grammar & spelling", "Translate..."]
    );
}

#[test]
fn more_friendly_swaps_periods_for_exclamation_and_emoji() {
    assert_eq!(RephraseOption::MoreFriendly.apply("Hello. Goodbye."), "Hello! 😊 Goodbye! 😊");
}

#[test]
fn more_formal_after_friendly_restores_periods() {
    let friendly = RephraseOption::MoreFriendly.apply("Hello. Goodbye.");
    let formal = RephraseOption::MoreFormal.apply(&friendly);
    assert!(!formal.contains('😊'));
    assert!(!formal.contains('!'));
    assert_eq!(formal, "Hello.  Goodbye. ");
}

#[test]
fn fix_grammar_capitalizes_first_letter_only() {
    assert_eq!(RephraseOption::FixGrammar.apply("thanks for waiting. we shipped it."), "Thanks for waiting. we shipped it.");
    assert_eq!(RephraseOption::FixGrammar.apply("ébauche"), "Ébauche");
    assert_eq!(RephraseOption::FixGrammar.apply(""), "");
}

#[test]
fn inert_options_leave_text_unchanged() {
    for option in [RephraseOption::MyToneOfVoice, RephraseOption::Translate] {
        assert_eq!(option.apply("Keep. Me!"), "Keep. Me!");
    }
}

// =============================================================
// EditorState
// =============================================================

#[test]
fn open_stages_source_text() {
    let state = EditorState::open("draft");
    assert_eq!(state.staged, "draft");
    assert!(!state.processing);
    assert_eq!(state.apply_label(), "Apply Changes");
}

#[test]
fn rephrase_compounds_on_staged_text() {
    let mut state = EditorState::open("ok.");
    state.rephrase(RephraseOption::MoreFriendly);
    state.rephrase(RephraseOption::MoreFriendly);
    assert_eq!(state.staged, "ok! 😊");

    state.rephrase(RephraseOption::FixGrammar);
    assert_eq!(state.staged, "Ok! 😊");
}

#[test]
fn begin_rephrase_blocks_second_request() {
    let mut state = EditorState::open("a.");
    assert!(state.begin_rephrase());
    assert!(!state.begin_rephrase());
    assert_eq!(state.apply_label(), "Applying...");

    state.finish_rephrase(RephraseOption::MoreFriendly);
    assert!(!state.processing);
    assert_eq!(state.staged, "a! 😊");
}

#[test]
fn set_staged_ignored_while_processing() {
    let mut state = EditorState::open("a");
    state.begin_rephrase();
    state.set_staged("typed".to_owned());
    assert_eq!(state.staged, "a");

    state.finish_rephrase(RephraseOption::MyToneOfVoice);
    state.set_staged("typed".to_owned());
    assert_eq!(state.staged, "typed");
}
