#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::net::types::Message;

/// State for the message board: the last retrieved message list plus a
/// sequence token ordering overlapping retrieves.
///
/// `loading` is true while the newest retrieve is unsettled; the board
/// page disables the Retrieve button off it. Retrieves triggered by a
/// send can still overlap a button retrieve.
///
/// Retrieves are not cancellable once issued, so two in flight at once can
/// complete in either order. Every retrieve takes a token from
/// [`begin_retrieve`](Self::begin_retrieve), and only the response holding
/// the newest token may touch the list; stale responses are discarded.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub messages: Vec<Message>,
    pub loading: bool,
    latest_retrieve: u64,
}

impl BoardState {
    /// Start a retrieve, returning the token its response must present.
    pub fn begin_retrieve(&mut self) -> u64 {
        self.latest_retrieve += 1;
        self.loading = true;
        self.latest_retrieve
    }

    /// Replace the message list if `token` is still the newest retrieve.
    ///
    /// Returns `false` (and leaves the list untouched) for stale tokens.
    pub fn apply_retrieve(&mut self, token: u64, messages: Vec<Message>) -> bool {
        if token != self.latest_retrieve {
            return false;
        }
        self.messages = messages;
        self.loading = false;
        true
    }

    /// Record a failed retrieve. The previous rendering is kept either way;
    /// a stale failure does not clear the loading state of a newer retrieve.
    pub fn fail_retrieve(&mut self, token: u64) {
        if token == self.latest_retrieve {
            self.loading = false;
        }
    }
}
