//! Cell values and player marks.
//!
//! ## Mark
//!
//! The two players, `X` and `O`. X always moves first after a reset.
//!
//! ## CellValue
//!
//! What a single board position holds: `Empty`, or one of the two marks.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the other player's mark.
    ///
    /// ```
    /// use rust_tictactoe::core::Mark;
    ///
    /// assert_eq!(Mark::X.opponent(), Mark::O);
    /// assert_eq!(Mark::O.opponent(), Mark::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Iterate over both marks, X first.
    pub fn both() -> impl Iterator<Item = Mark> {
        [Mark::X, Mark::O].into_iter()
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    X,
    O,
}

impl CellValue {
    /// True if no mark has been placed here.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            CellValue::Empty => None,
            CellValue::X => Some(Mark::X),
            CellValue::O => Some(Mark::O),
        }
    }
}

impl From<Mark> for CellValue {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => CellValue::X,
            Mark::O => CellValue::O,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mark() {
            Some(mark) => write!(f, "{}", mark),
            None => Ok(()),
        }
    }
}
