//! Tick scheduler - turns a monotonic timestamp stream into gravity steps.
//!
//! The front-end calls in at its own frame rate; the scheduler only reports a step
//! once the current drop interval has elapsed since the last recorded step.

/// Gravity clock driven by caller-supplied timestamps (milliseconds).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickScheduler {
    last_tick_ms: Option<u64>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gravity step is due at `now_ms`. Records `now_ms` as the new
    /// baseline when it is.
    ///
    /// The first call after construction or [`reset`](Self::reset) only records the
    /// baseline. Timestamps that go backwards are treated as zero elapsed time.
    pub fn poll(&mut self, now_ms: u64, interval_ms: u32) -> bool {
        let Some(last) = self.last_tick_ms else {
            self.last_tick_ms = Some(now_ms);
            return false;
        };

        if now_ms.saturating_sub(last) >= interval_ms as u64 {
            self.last_tick_ms = Some(now_ms);
            return true;
        }

        false
    }

    /// Drop the baseline so a stale timestamp cannot fire into a fresh game.
    pub fn reset(&mut self) {
        self.last_tick_ms = None;
    }

    pub fn last_tick_ms(&self) -> Option<u64> {
        self.last_tick_ms
    }
}
