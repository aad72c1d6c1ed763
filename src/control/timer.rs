use std::time::{Duration, Instant};

/// One-shot deadline that reverts transient feedback back to idle.
///
/// The owning control holds at most one scheduled revert: scheduling
/// replaces any pending deadline, cancelling clears it, and dropping the
/// owner drops the deadline with it, so a disposed control can never
/// observe a late revert.
#[derive(Debug, Default)]
pub struct RevertTimer {
    deadline: Option<Instant>,
}

impl RevertTimer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Schedule a revert at `now + delay`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once per schedule, when `now` has reached the
    /// deadline. The deadline is consumed, so the timer cannot fire twice.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
