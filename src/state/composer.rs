#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

/// Soft limit shown next to the composer. Advisory only: typing past it is
/// neither blocked nor trimmed; the server enforces its own hard limit.
pub const SOFT_LIMIT: usize = 250;

/// State for the message composer: the draft text being typed.
#[derive(Clone, Debug, Default)]
pub struct ComposerState {
    pub draft: String,
}

impl ComposerState {
    /// Counter text shown next to the input, e.g. `12 / 250`.
    ///
    /// Counts characters rather than bytes so multi-byte input does not
    /// inflate the reading.
    pub fn counter_label(&self) -> String {
        format!("{} / {SOFT_LIMIT}", self.draft.chars().count())
    }

    /// The draft with surrounding whitespace removed, or `None` when
    /// nothing sendable remains.
    pub fn trimmed(&self) -> Option<String> {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    }

    /// Discard the draft (after a successful send).
    pub fn clear(&mut self) {
        self.draft.clear();
    }
}
