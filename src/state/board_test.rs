use super::*;

fn msg(content: &str) -> Message {
    Message {
        content: content.to_owned(),
        timestamp: "2024-03-05T08:15:30Z".to_owned(),
    }
}

// =============================================================
// BoardState defaults
// =============================================================

#[test]
fn default_has_no_messages() {
    let state = BoardState::default();
    assert!(state.messages.is_empty());
}

#[test]
fn default_not_loading() {
    let state = BoardState::default();
    assert!(!state.loading);
}

// =============================================================
// Retrieve sequencing
// =============================================================

#[test]
fn begin_retrieve_sets_loading() {
    let mut state = BoardState::default();
    state.begin_retrieve();
    assert!(state.loading);
}

#[test]
fn begin_retrieve_tokens_increase() {
    let mut state = BoardState::default();
    let first = state.begin_retrieve();
    let second = state.begin_retrieve();
    assert!(second > first);
}

#[test]
fn current_token_replaces_list() {
    let mut state = BoardState::default();
    state.messages = vec![msg("old")];

    let token = state.begin_retrieve();
    assert!(state.apply_retrieve(token, vec![msg("a"), msg("b")]));
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].content, "a");
    assert_eq!(state.messages[1].content, "b");
    assert!(!state.loading);
}

#[test]
fn stale_response_is_discarded() {
    let mut state = BoardState::default();
    let stale = state.begin_retrieve();
    let _newer = state.begin_retrieve();

    assert!(!state.apply_retrieve(stale, vec![msg("stale")]));
    assert!(state.messages.is_empty());
    assert!(state.loading);
}

#[test]
fn newest_response_wins_regardless_of_arrival_order() {
    let mut state = BoardState::default();
    let first = state.begin_retrieve();
    let second = state.begin_retrieve();

    // Second retrieve's response arrives first, then the first's.
    assert!(state.apply_retrieve(second, vec![msg("new")]));
    assert!(!state.apply_retrieve(first, vec![msg("old")]));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].content, "new");
}

// =============================================================
// Retrieve failure
// =============================================================

#[test]
fn failed_retrieve_keeps_previous_list() {
    let mut state = BoardState::default();
    let token = state.begin_retrieve();
    assert!(state.apply_retrieve(token, vec![msg("kept")]));

    let failed = state.begin_retrieve();
    state.fail_retrieve(failed);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].content, "kept");
    assert!(!state.loading);
}

#[test]
fn stale_failure_does_not_clear_newer_loading() {
    let mut state = BoardState::default();
    let stale = state.begin_retrieve();
    let _newer = state.begin_retrieve();

    state.fail_retrieve(stale);
    assert!(state.loading);
}
