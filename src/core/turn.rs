//! Turn sequencing state.

use serde::{Deserialize, Serialize};

use super::cell::Mark;

/// Whose move it is, and whether moves are accepted at all.
///
/// `active` goes false on a win or draw and stays false until a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// The player who places the next mark.
    pub active_player: Mark,
    /// False once the game reached a terminal state.
    pub active: bool,
}

impl TurnState {
    /// Fresh game: X to move, accepting moves.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active_player: Mark::X,
            active: true,
        }
    }

    /// Hand the move to the other player.
    pub fn advance(&mut self) {
        self.active_player = self.active_player.opponent();
    }

    /// Stop accepting moves until the next reset.
    pub fn finish(&mut self) {
        self.active = false;
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
