//! Engine configuration.
//!
//! `EngineConfig` holds everything a host may tune before the first game:
//! - Initial board size and mode
//! - Delays for the automatic reset and the computer's move
//! - RNG seed (tests pin it, live games leave it unset)
//! - The key scores are persisted under

use serde::{Deserialize, Serialize};

/// Default side length of the board.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Largest accepted side length. Keeps N² cells and the 2N+2 lines
/// allocatable.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Delay before a finished game clears itself.
pub const DEFAULT_RESET_DELAY_MS: u64 = 5000;

/// Delay before the computer answers a move in solo mode.
pub const DEFAULT_COMPUTER_MOVE_DELAY_MS: u64 = 500;

/// Storage key for persisted scores.
pub const DEFAULT_SCORE_KEY: &str = "scores";

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length N of the N×N board.
    pub board_size: usize,

    /// Start in single-player mode (computer plays O).
    pub solo_mode: bool,

    /// Milliseconds between a win/draw and the automatic reset.
    pub reset_delay_ms: u64,

    /// Milliseconds between X's move and the computer's reply.
    pub computer_move_delay_ms: u64,

    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Key under which scores are stored.
    pub score_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            solo_mode: false,
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
            computer_move_delay_ms: DEFAULT_COMPUTER_MOVE_DELAY_MS,
            seed: None,
            score_key: DEFAULT_SCORE_KEY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Set the initial board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the initial mode.
    #[must_use]
    pub fn with_solo_mode(mut self, solo: bool) -> Self {
        self.solo_mode = solo;
        self
    }

    /// Set the automatic reset delay.
    #[must_use]
    pub fn with_reset_delay(mut self, ms: u64) -> Self {
        self.reset_delay_ms = ms;
        self
    }

    /// Set the computer move delay.
    #[must_use]
    pub fn with_computer_move_delay(mut self, ms: u64) -> Self {
        self.computer_move_delay_ms = ms;
        self
    }

    /// Pin the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the score storage key.
    #[must_use]
    pub fn with_score_key(mut self, key: impl Into<String>) -> Self {
        self.score_key = key.into();
        self
    }
}
