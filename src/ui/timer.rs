//! Owned timers polled by the UI loop.
//!
//! A timer belongs to exactly one component. Dropping the component drops the
//! timer, which is how pending callbacks are cancelled.

use std::time::{Duration, Instant};

/// One-shot timer.
#[derive(Debug, Clone, Copy)]
pub struct Timeout {
    deadline: Instant,
    fired: bool,
}

impl Timeout {
    pub fn new(start: Instant, after: Duration) -> Self {
        Self {
            deadline: start + after,
            fired: false,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns the scheduled deadline the first time `now` reaches it, and
    /// `None` before that and on every later poll.
    pub fn poll(&mut self, now: Instant) -> Option<Instant> {
        if self.fired || now < self.deadline {
            return None;
        }
        self.fired = true;
        Some(self.deadline)
    }
}

/// Repeating timer. The first tick is one period after `start`.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    next: Instant,
    period: Duration,
}

impl Interval {
    pub fn new(start: Instant, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            next: start + period,
            period,
        }
    }

    /// Number of ticks that became due since the last poll. A late poll catches
    /// up on every missed tick.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now >= self.next {
            ticks += 1;
            self.next += self.period;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn timeout_fires_once_at_deadline() {
        let start = Instant::now();
        let mut timeout = Timeout::new(start, ms(100));

        assert_eq!(timeout.poll(start + ms(99)), None);
        assert_eq!(timeout.poll(start + ms(250)), Some(start + ms(100)));
        assert_eq!(timeout.poll(start + ms(300)), None);
        assert!(timeout.fired);
    }

    #[test]
    fn interval_catches_up_after_late_poll() {
        let start = Instant::now();
        let mut interval = Interval::new(start, ms(800));

        assert_eq!(interval.poll(start + ms(799)), 0);
        assert_eq!(interval.poll(start + ms(800)), 1);
        assert_eq!(interval.poll(start + ms(3300)), 3);
        assert_eq!(interval.poll(start + ms(3300)), 0);
    }
}
