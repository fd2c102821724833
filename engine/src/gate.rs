//! Submission rate gate.

use std::time::{Duration, Instant};

/// Minimum spacing between accepted submission attempts.
pub const MIN_SUBMIT_INTERVAL: Duration = Duration::from_secs(30);

/// Rate limiter for form submissions.
///
/// One gate per form controller, constructed explicitly so its lifetime and
/// test isolation are visible. The gate is consulted before validation, so a
/// submission that later fails validation still costs its slot.
#[derive(Debug, Default)]
pub struct SubmitGate {
    last_accepted: Option<Instant>,
}

impl SubmitGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the gate and, when it passes, arm it.
    ///
    /// Returns `true` on the first call and whenever at least
    /// [`MIN_SUBMIT_INTERVAL`] has elapsed since the last accepted call,
    /// recording `now` as the new reference point. A denied check changes
    /// nothing.
    pub fn check(&mut self, now: Instant) -> bool {
        let allowed = self
            .last_accepted
            .is_none_or(|last| now.duration_since(last) >= MIN_SUBMIT_INTERVAL);
        if allowed {
            self.last_accepted = Some(now);
        }
        allowed
    }
}
