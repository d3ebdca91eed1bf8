//! Pausable level clock.

use std::time::Duration;

/// Running time of the active level, frozen while paused.
///
/// Readings are taken against a caller-supplied `now`, so the clock never
/// reads the system time itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct LevelClock {
    base: Duration,
    resumed_at: Option<Duration>,
}

impl LevelClock {
    /// Starts a fresh, running clock at `now`.
    pub(crate) const fn started(now: Duration) -> Self {
        Self {
            base: Duration::ZERO,
            resumed_at: Some(now),
        }
    }

    /// Freezes accrual; a frozen clock stays as it is.
    pub(crate) fn pause(&mut self, now: Duration) {
        if let Some(resumed_at) = self.resumed_at.take() {
            self.base = self.base.saturating_add(now.saturating_sub(resumed_at));
        }
    }

    /// Restarts accrual; a running clock keeps its original resume point.
    pub(crate) fn resume(&mut self, now: Duration) {
        if self.resumed_at.is_none() {
            self.resumed_at = Some(now);
        }
    }

    /// Elapsed running time as of `now`.
    pub(crate) fn elapsed(&self, now: Duration) -> Duration {
        match self.resumed_at {
            Some(resumed_at) => self.base.saturating_add(now.saturating_sub(resumed_at)),
            None => self.base,
        }
    }
}
