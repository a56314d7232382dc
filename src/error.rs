//! Error types for score storage and input parsing.

use thiserror::Error;

/// Errors at the fallible edges of the engine: storage and input parsing.
///
/// Game operations themselves never fail; see `GameEngine::apply_move`.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid score data: {0}")]
    InvalidScores(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Invalid board size: {0:?}")]
    InvalidBoardSize(String),
}

/// Convenience Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
