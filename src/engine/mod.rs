//! Game engine: board state, win/draw detection and turn sequencing.
//!
//! `GameEngine` is the single stateful component. Hosts drive it with
//! direct calls (`apply_move`, `set_board_size`, `set_solo_mode`, `reset`,
//! `fire_timer`) and observe it through the injected display sink.

pub mod builder;
pub mod game;
pub mod opponent;

pub use builder::GameEngineBuilder;
pub use game::GameEngine;
pub use opponent::RandomOpponent;

use crate::core::Mark;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// One player completed a line.
    Winner(Mark),
    /// Board filled with no complete line.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, mark: Mark) -> bool {
        matches!(self, GameResult::Winner(m) if *m == mark)
    }
}

/// What a single move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed: occupied cell, out-of-range index, or game over.
    Ignored,
    /// Mark placed, play passes to the other player.
    Continue,
    /// Mark placed and the game ended.
    Finished(GameResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Mark::O);
        assert!(result.is_winner(Mark::O));
        assert!(!result.is_winner(Mark::X));
        assert!(!GameResult::Draw.is_winner(Mark::X));
    }
}
