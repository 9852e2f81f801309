//! One-shot loading gate in front of the site.

use crate::ui::timer::Timeout;
use log::info;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Loading,
    Open,
}

/// Holds the splash screen for a fixed duration from mount, then stays open.
/// Owned by the application root; there is no way to close it again.
#[derive(Debug)]
pub struct LoadingGate {
    mounted_at: Instant,
    timer: Timeout,
    state: GateState,
}

impl LoadingGate {
    pub fn new(mounted_at: Instant, duration: Duration) -> Self {
        Self {
            mounted_at,
            timer: Timeout::new(mounted_at, duration),
            state: GateState::Loading,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == GateState::Open
    }

    /// Returns true on the poll that opens the gate.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.timer.poll(now) {
            Some(deadline) => {
                self.state = GateState::Open;
                info!(
                    "Loading gate opened after {}ms",
                    deadline.duration_since(self.mounted_at).as_millis()
                );
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_closed_until_duration_then_open_forever() {
        let start = Instant::now();
        let mut gate = LoadingGate::new(start, Duration::from_millis(6000));

        for at in [0, 1000, 5999] {
            assert!(!gate.poll(start + Duration::from_millis(at)));
            assert_eq!(gate.state, GateState::Loading);
        }
        assert!(gate.poll(start + Duration::from_millis(6000)));
        for at in [6001, 9000, 120_000] {
            assert!(!gate.poll(start + Duration::from_millis(at)));
            assert!(gate.is_open());
        }
    }

    #[test]
    fn late_first_poll_opens_immediately() {
        let start = Instant::now();
        let mut gate = LoadingGate::new(start, Duration::from_millis(6000));
        assert!(gate.poll(start + Duration::from_secs(30)));
        assert!(gate.is_open());
    }
}
