//! Delayed actions.
//!
//! The engine never sleeps or spawns. It asks a `Scheduler` for a timer and
//! remembers which `TimerAction` that handle stands for; when the host's
//! timer fires it hands the handle back to `GameEngine::fire_timer`.
//!
//! `Clock` extends `Scheduler` with a pull interface so the engine can drive
//! time itself. `VirtualClock` implements it deterministically.

pub mod clock;

use serde::{Deserialize, Serialize};

pub use clock::VirtualClock;

/// Identity of a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

impl TimerHandle {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// What the engine does when a timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerAction {
    /// Clear the finished game.
    Reset,
    /// Let the computer place O.
    ComputerMove,
}

/// Timer capability injected into the engine.
pub trait Scheduler {
    /// Arrange for `handle` to fire after `delay_ms` milliseconds.
    fn schedule_after(&mut self, delay_ms: u64) -> TimerHandle;

    /// Stop `handle` from firing. Unknown handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// A scheduler whose time can be read and advanced by the caller.
pub trait Clock: Scheduler {
    /// Current time in milliseconds since the clock started.
    fn now_ms(&self) -> u64;

    /// Remove and return the earliest timer due at or before `deadline_ms`,
    /// moving the clock to its due time.
    ///
    /// Timers due at the same instant come out in scheduling order.
    fn pop_due(&mut self, deadline_ms: u64) -> Option<TimerHandle>;

    /// Move the clock forward to `deadline_ms`. Never moves backward.
    fn advance_to(&mut self, deadline_ms: u64);
}
