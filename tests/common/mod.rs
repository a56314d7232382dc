//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use rust_tictactoe::display::RecordingSink;
use rust_tictactoe::engine::{GameEngine, GameEngineBuilder};
use rust_tictactoe::schedule::VirtualClock;
use rust_tictactoe::scores::{JsonScoreStore, MemoryStore};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub type TestEngine = GameEngine<RecordingSink, VirtualClock, JsonScoreStore<MemoryStore>>;

/// Engine on a virtual clock with in-memory scores.
///
/// Seeds the RNG with 42 unless the builder already pins a seed.
pub fn engine_with(builder: GameEngineBuilder, backend: MemoryStore) -> TestEngine {
    init_logging();
    let builder = match builder.config().seed {
        Some(_) => builder,
        None => builder.seed(42),
    };
    builder.build_with_storage(RecordingSink::new(), VirtualClock::new(), backend)
}

/// Default 3×3 two-player engine.
pub fn engine() -> TestEngine {
    engine_with(GameEngineBuilder::new(), MemoryStore::new())
}

/// Play `moves` in order, alternating from whoever is to move.
pub fn play(engine: &mut TestEngine, moves: &[usize]) {
    for &index in moves {
        engine.apply_move(index);
    }
}
