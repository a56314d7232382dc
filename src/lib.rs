//! # rust-tictactoe
//!
//! An N×N tic-tac-toe game engine for browser front ends.
//!
//! ## Design Principles
//!
//! 1. **Instance State**: Board, turn, mode and scores live in one
//!    `GameEngine` value. No globals, so tests can run many engines.
//!
//! 2. **Injected Collaborators**: Rendering (`DisplaySink`), timers
//!    (`Scheduler`) and persistence (`ScoreStore`) are traits. The engine
//!    knows nothing about the DOM, `setTimeout` or `localStorage`.
//!
//! 3. **Silent No-Ops**: Invalid moves change nothing and raise nothing.
//!    Only storage and input parsing have error types.
//!
//! ## Modules
//!
//! - `core`: Cells, marks, board and win lines, turn state, RNG, configuration
//! - `engine`: `GameEngine`, its builder, and the random opponent
//! - `scores`: Score mapping and key-value persistence
//! - `display`: Render commands and sinks
//! - `schedule`: Timer handles, scheduler traits, virtual clock
//! - `input`: Commands parsed from UI values
//! - `error`: Error type for storage and parsing

pub mod core;
pub mod engine;
pub mod scores;
pub mod display;
pub mod schedule;
pub mod input;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    win_combinations, Board, CellValue, EngineConfig, GameRng, Line, Mark,
    TurnState,
};

pub use crate::engine::{GameEngine, GameEngineBuilder, GameResult, MoveOutcome, RandomOpponent};

pub use crate::scores::{FileStore, JsonScoreStore, KeyValueStore, MemoryStore, ScoreStore, Scores};

pub use crate::display::{DisplayEvent, DisplaySink, NullSink, RecordingSink};

pub use crate::schedule::{Clock, Scheduler, TimerAction, TimerHandle, VirtualClock};

pub use crate::input::Command;

pub use crate::error::{EngineError, Result};
