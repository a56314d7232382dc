//! Core game types: cells, board, turn state, RNG, configuration.
//!
//! Everything here is pure data with no collaborators; the engine module
//! composes these into a playable game.

pub mod cell;
pub mod board;
pub mod turn;
pub mod rng;
pub mod config;

pub use cell::{CellValue, Mark};
pub use board::{win_combinations, Board, Line};
pub use turn::TurnState;
pub use rng::GameRng;
pub use config::{EngineConfig, MAX_BOARD_SIZE};
