//! Input adapter: UI values to engine commands.
//!
//! The page wires three controls to the engine: cell clicks, a board-size
//! selector and a game-mode selector, plus a confirmed reset. Selector
//! values arrive as strings; the helpers here turn them into `Command`s
//! for `GameEngine::dispatch`.

use serde::{Deserialize, Serialize};

use crate::core::MAX_BOARD_SIZE;
use crate::error::{EngineError, Result};

/// Game-mode selector value meaning single-player.
pub const SOLO_MODE_VALUE: &str = "1";

/// A request from the input surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Cell clicked.
    Move(usize),
    /// Board-size selector changed.
    SetBoardSize(usize),
    /// Game-mode selector changed.
    SetSoloMode(bool),
    /// Reset confirmed.
    Reset,
}

impl Command {
    /// Parse a board-size selector value such as `"4"`.
    ///
    /// Values above `MAX_BOARD_SIZE` are rejected.
    ///
    /// ```
    /// use rust_tictactoe::input::Command;
    ///
    /// assert_eq!(Command::board_size(" 5 ").unwrap(), Command::SetBoardSize(5));
    /// assert!(Command::board_size("big").is_err());
    /// assert!(Command::board_size("5000000000").is_err());
    /// ```
    pub fn board_size(value: &str) -> Result<Self> {
        value
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&n| n <= MAX_BOARD_SIZE)
            .map(Command::SetBoardSize)
            .ok_or_else(|| EngineError::InvalidBoardSize(value.to_string()))
    }

    /// Map a game-mode selector value: `"1"` is solo, anything else is
    /// two-player.
    pub fn game_mode(value: &str) -> Self {
        Command::SetSoloMode(value == SOLO_MODE_VALUE)
    }
}
