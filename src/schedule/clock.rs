//! Deterministic virtual clock.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use super::{Clock, Scheduler, TimerHandle};

/// Manually advanced clock with a timer queue.
///
/// ```
/// use rust_tictactoe::schedule::{Clock, Scheduler, VirtualClock};
///
/// let mut clock = VirtualClock::new();
/// let late = clock.schedule_after(500);
/// let early = clock.schedule_after(100);
///
/// assert_eq!(clock.pop_due(1000), Some(early));
/// assert_eq!(clock.now_ms(), 100);
/// assert_eq!(clock.pop_due(1000), Some(late));
/// assert_eq!(clock.pop_due(1000), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    now_ms: u64,
    next_id: u64,
    /// Ordered by (due time, handle). Handles grow monotonically, so ties
    /// resolve in scheduling order.
    queue: BTreeSet<(u64, TimerHandle)>,
    due_at: FxHashMap<TimerHandle, u64>,
}

impl VirtualClock {
    /// Create a clock at time zero with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers still waiting.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of a waiting timer.
    pub fn due_time(&self, handle: TimerHandle) -> Option<u64> {
        self.due_at.get(&handle).copied()
    }
}

impl Scheduler for VirtualClock {
    fn schedule_after(&mut self, delay_ms: u64) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let due = self.now_ms.saturating_add(delay_ms);
        self.queue.insert((due, handle));
        self.due_at.insert(handle, due);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(due) = self.due_at.remove(&handle) {
            self.queue.remove(&(due, handle));
        }
    }
}

impl Clock for VirtualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn pop_due(&mut self, deadline_ms: u64) -> Option<TimerHandle> {
        let &(due, handle) = self.queue.first()?;
        if due > deadline_ms {
            return None;
        }

        self.queue.remove(&(due, handle));
        self.due_at.remove(&handle);
        self.now_ms = self.now_ms.max(due);
        Some(handle)
    }

    fn advance_to(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_uses_current_time() {
        let mut clock = VirtualClock::new();
        clock.advance_to(1000);
        let handle = clock.schedule_after(250);
        assert_eq!(clock.due_time(handle), Some(1250));
    }

    #[test]
    fn test_pop_due_respects_deadline() {
        let mut clock = VirtualClock::new();
        let handle = clock.schedule_after(500);

        assert_eq!(clock.pop_due(499), None);
        assert_eq!(clock.now_ms(), 0);
        assert_eq!(clock.pop_due(500), Some(handle));
        assert_eq!(clock.now_ms(), 500);
    }

    #[test]
    fn test_same_due_time_fires_in_schedule_order() {
        let mut clock = VirtualClock::new();
        let first = clock.schedule_after(100);
        let second = clock.schedule_after(100);

        assert_eq!(clock.pop_due(100), Some(first));
        assert_eq!(clock.pop_due(100), Some(second));
    }

    #[test]
    fn test_cancel_removes_timer() {
        let mut clock = VirtualClock::new();
        let handle = clock.schedule_after(100);
        clock.cancel(handle);

        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.pop_due(u64::MAX), None);

        // Cancelling twice is harmless
        clock.cancel(handle);
    }

    #[test]
    fn test_advance_never_goes_backward() {
        let mut clock = VirtualClock::new();
        clock.advance_to(300);
        clock.advance_to(100);
        assert_eq!(clock.now_ms(), 300);
    }

    #[test]
    fn test_handles_are_unique() {
        let mut clock = VirtualClock::new();
        let a = clock.schedule_after(0);
        let b = clock.schedule_after(0);
        assert_ne!(a, b);
    }
}
