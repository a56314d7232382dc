//! Builder for `GameEngine`.

use super::GameEngine;
use crate::core::EngineConfig;
use crate::display::DisplaySink;
use crate::schedule::Scheduler;
use crate::scores::{JsonScoreStore, KeyValueStore, ScoreStore};

/// Builder for creating a `GameEngine`.
///
/// ```
/// use rust_tictactoe::display::RecordingSink;
/// use rust_tictactoe::engine::GameEngineBuilder;
/// use rust_tictactoe::schedule::VirtualClock;
/// use rust_tictactoe::scores::MemoryStore;
///
/// let engine = GameEngineBuilder::new()
///     .board_size(4)
///     .solo_mode(true)
///     .seed(7)
///     .build_with_storage(RecordingSink::new(), VirtualClock::new(), MemoryStore::new());
///
/// assert_eq!(engine.board_size(), 4);
/// assert!(engine.solo_mode());
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameEngineBuilder {
    config: EngineConfig,
}

impl GameEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn board_size(mut self, size: usize) -> Self {
        self.config.board_size = size;
        self
    }

    pub fn solo_mode(mut self, solo: bool) -> Self {
        self.config.solo_mode = solo;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn reset_delay_ms(mut self, ms: u64) -> Self {
        self.config.reset_delay_ms = ms;
        self
    }

    pub fn computer_move_delay_ms(mut self, ms: u64) -> Self {
        self.config.computer_move_delay_ms = ms;
        self
    }

    pub fn score_key(mut self, key: impl Into<String>) -> Self {
        self.config.score_key = key.into();
        self
    }

    /// Configuration built so far.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the engine with a ready-made score store.
    pub fn build<D, S, K>(self, display: D, scheduler: S, store: K) -> GameEngine<D, S, K>
    where
        D: DisplaySink,
        S: Scheduler,
        K: ScoreStore,
    {
        GameEngine::new(self.config, display, scheduler, store)
    }

    /// Build the engine keeping scores as JSON in `backend` under the
    /// configured score key.
    pub fn build_with_storage<D, S, B>(
        self,
        display: D,
        scheduler: S,
        backend: B,
    ) -> GameEngine<D, S, JsonScoreStore<B>>
    where
        D: DisplaySink,
        S: Scheduler,
        B: KeyValueStore,
    {
        let store = JsonScoreStore::with_key(backend, self.config.score_key.clone());
        GameEngine::new(self.config, display, scheduler, store)
    }
}
