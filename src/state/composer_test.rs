use super::*;

fn with_draft(draft: &str) -> ComposerState {
    ComposerState {
        draft: draft.to_owned(),
    }
}

// =============================================================
// Counter label
// =============================================================

#[test]
fn default_counter_reads_zero() {
    let state = ComposerState::default();
    assert_eq!(state.counter_label(), "0 / 250");
}

#[test]
fn counter_tracks_draft_length() {
    let state = with_draft("hello");
    assert_eq!(state.counter_label(), "5 / 250");
}

#[test]
fn counter_counts_characters_not_bytes() {
    // 5 characters, more than 5 bytes.
    let state = with_draft("héllo");
    assert_eq!(state.counter_label(), "5 / 250");
}

#[test]
fn counter_passes_soft_limit_without_clamping() {
    let state = with_draft(&"x".repeat(251));
    assert_eq!(state.counter_label(), "251 / 250");
}

// =============================================================
// Trimming
// =============================================================

#[test]
fn trimmed_strips_surrounding_whitespace() {
    let state = with_draft("  hello there  ");
    assert_eq!(state.trimmed().as_deref(), Some("hello there"));
}

#[test]
fn whitespace_only_draft_has_nothing_to_send() {
    let state = with_draft("   ");
    assert!(state.trimmed().is_none());
}

#[test]
fn empty_draft_has_nothing_to_send() {
    let state = ComposerState::default();
    assert!(state.trimmed().is_none());
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_resets_draft_and_counter() {
    let mut state = with_draft("pending message");
    state.clear();
    assert!(state.draft.is_empty());
    assert_eq!(state.counter_label(), "0 / 250");
}
