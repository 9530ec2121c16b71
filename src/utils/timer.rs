//! Deadline-based delayed triggers for the event loop.
//!
//! The event loop is single threaded, so a "timer" is just an owned
//! deadline that the owner checks on every tick. Dropping or cancelling the
//! trigger guarantees it never fires.

use std::time::{Duration, Instant};

/// A one-shot trigger that fires once its deadline has passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelayedTrigger {
    due: Option<Instant>,
}

impl DelayedTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the trigger for `now + delay`, replacing any earlier deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Disarm the trigger. Returns true if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.due.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Returns true exactly once, on the first call at or after the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let start = Instant::now();
        let mut trigger = DelayedTrigger::new();
        trigger.schedule(start, Duration::from_millis(600));

        assert!(!trigger.fire(start + Duration::from_millis(599)));
        assert!(trigger.fire(start + Duration::from_millis(600)));
        assert!(!trigger.fire(start + Duration::from_millis(900)));
        assert!(!trigger.is_pending());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut trigger = DelayedTrigger::new();
        trigger.schedule(start, Duration::from_millis(600));

        assert!(trigger.cancel());
        assert!(!trigger.cancel());
        assert!(!trigger.fire(start + Duration::from_secs(5)));
    }
}
