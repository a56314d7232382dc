//! Cumulative win scores and their persistence.
//!
//! Scores outlive individual games: board resets never touch them, and the
//! only mutation is an increment after a win. They are stored as a single
//! JSON object `{"X": <int>, "O": <int>}` under one key of a key-value
//! store, mirroring how a browser keeps them in `localStorage`.
//!
//! - `Scores`: the in-memory mapping
//! - `ScoreStore`: load/save contract the engine writes through
//! - `KeyValueStore`: raw string storage (`MemoryStore`, `FileStore`)
//! - `JsonScoreStore`: `ScoreStore` over any `KeyValueStore`

pub mod store;

use serde::{Deserialize, Serialize};

use crate::core::Mark;

pub use store::{FileStore, JsonScoreStore, KeyValueStore, MemoryStore};

/// Win counts per player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Scores {
    #[serde(rename = "X")]
    pub x: u32,
    #[serde(rename = "O")]
    pub o: u32,
}

impl Scores {
    /// Create a score mapping with explicit counts.
    #[must_use]
    pub const fn new(x: u32, o: u32) -> Self {
        Self { x, o }
    }

    /// Wins recorded for `mark`.
    #[must_use]
    pub const fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Record one more win for `mark`.
    pub fn increment(&mut self, mark: Mark) {
        let count = match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        };
        *count = count.saturating_add(1);
    }
}

/// Durable score storage consumed by the engine.
///
/// Neither method fails toward the caller: a store that cannot read its data
/// reports zero scores, and a store that cannot write logs and moves on.
pub trait ScoreStore {
    /// Read persisted scores, or `Scores::default()` if absent or corrupt.
    fn load(&self) -> Scores;

    /// Persist scores. Last write wins.
    fn save(&mut self, scores: &Scores);
}

impl<T: ScoreStore + ?Sized> ScoreStore for Box<T> {
    fn load(&self) -> Scores {
        (**self).load()
    }

    fn save(&mut self, scores: &Scores) {
        (**self).save(scores);
    }
}
