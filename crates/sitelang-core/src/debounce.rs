//! Trailing-edge debouncer driven by caller-supplied timestamps.
//!
//! Timestamps are offsets from an arbitrary origin (page load in the browser),
//! which keeps the logic free of wall clocks and easy to step in tests.

use std::time::Duration;

/// Coalesces bursts of triggers into one firing after the quiet period.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    /// Debouncer with a fixed quiet period.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Quiet period.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a trigger at `now`; returns the (re)armed deadline.
    pub fn trigger(&mut self, now: Duration) -> Duration {
        let deadline = now + self.delay;
        self.deadline = Some(deadline);
        deadline
    }

    /// Pending deadline, if armed.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// `true` once when the host timer armed by the trigger at `armed_at` elapses,
    /// provided no later trigger re-armed the deadline; disarms on firing.
    ///
    /// The comparison uses the trigger timestamp only, so a coarse clock at the
    /// moment the timer reports in cannot suppress the firing.
    pub fn settle(&mut self, armed_at: Duration) -> bool {
        if self.deadline == Some(armed_at + self.delay) {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// `true` once when `now` has reached the deadline; disarms on firing.
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
