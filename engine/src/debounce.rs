//! Trailing-edge debouncer.

use std::time::{Duration, Instant};

/// Reusable trailing-edge debouncer.
///
/// Each [`poke`](Self::poke) pushes the deadline out by the configured
/// delay; the action runs only after a full delay of quiescence, when the
/// owner observes [`fire_if_due`](Self::fire_if_due) return `true`. The
/// pending deadline can be cancelled on teardown.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Register an occurrence of the debounced signal.
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// The instant the pending action becomes due, if one is pending.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline when it has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
