// SPDX-License-Identifier: MPL-2.0
//! Per-toast suspension timer.
//!
//! Every active toast owns one timer, armed when the toast is shown. The
//! provider's periodic tick polls it; the poll that observes the deadline
//! fires it, exactly once. A cancelled timer never fires.

use std::time::{Duration, Instant};

/// Lifecycle of a suspension timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Armed,
    Fired,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct SuspensionTimer {
    /// `None` when `start + duration` overflows; such a timer never fires.
    deadline: Option<Instant>,
    state: TimerState,
}

impl SuspensionTimer {
    /// Arms a timer firing `duration` after `start`.
    #[must_use]
    pub fn arm(start: Instant, duration: Duration) -> Self {
        Self {
            deadline: start.checked_add(duration),
            state: TimerState::Armed,
        }
    }

    /// Returns `true` if this poll fired the timer.
    pub fn poll(&mut self, now: Instant) -> bool {
        match (self.state, self.deadline) {
            (TimerState::Armed, Some(deadline)) if now >= deadline => {
                self.state = TimerState::Fired;
                true
            }
            _ => false,
        }
    }

    /// Cancels an armed timer. Returns `false` if it had already fired or
    /// been cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.state == TimerState::Armed {
            self.state = TimerState::Cancelled;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.state == TimerState::Armed
    }

    /// Time left before firing, or `None` if the timer is no longer armed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        if !self.is_armed() {
            return None;
        }
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
