//! One-shot timer driven by the event loop's ticks.
//!
//! Nothing runs in the background: the owner calls [`CancellableTimer::poll`]
//! with the current instant on every tick and acts when it returns `true`.
//! Dropping the owner drops the timer, so a timer can never fire into a
//! view that no longer exists.

use std::time::{Duration, Instant};

/// A single pending deadline that fires at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancellableTimer {
    deadline: Option<Instant>,
}

impl CancellableTimer {
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `delay` after `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline, zero once it has passed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    #[test]
    fn test_idle_timer_never_fires() {
        let mut timer = CancellableTimer::new();
        assert!(!timer.is_pending());
        assert!(!timer.poll(Instant::now()));
    }

    #[test]
    fn test_fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = CancellableTimer::new();
        timer.schedule(start, DELAY);

        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(1499)));
        assert!(timer.poll(start + DELAY));
        assert!(!timer.poll(start + DELAY * 2));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut timer = CancellableTimer::new();
        timer.schedule(start, DELAY);
        timer.cancel();
        assert!(!timer.poll(start + DELAY * 2));
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let start = Instant::now();
        let mut timer = CancellableTimer::new();
        timer.schedule(start, DELAY);
        timer.schedule(start + DELAY, DELAY);
        assert!(!timer.poll(start + DELAY));
        assert!(timer.poll(start + DELAY * 2));
    }

    #[test]
    fn test_remaining() {
        let start = Instant::now();
        let mut timer = CancellableTimer::new();
        assert_eq!(timer.remaining(start), None);
        timer.schedule(start, DELAY);
        assert_eq!(timer.remaining(start), Some(DELAY));
        assert_eq!(timer.remaining(start + DELAY * 3), Some(Duration::ZERO));
    }
}
