use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Periodic tick source. Owning one is the only way ticks are produced;
/// dropping it cancels every future tick.
#[derive(Debug)]
pub struct TickTimer {
    period: Duration,
    next_due: Instant,
}

impl TickTimer {
    pub fn start(period: Duration, now: Instant) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whole periods elapsed up to `now` that have not been reported yet.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        if now < self.next_due {
            return 0;
        }
        let behind = now.duration_since(self.next_due).as_nanos() / self.period.as_nanos();
        let count = u32::try_from(behind.saturating_add(1)).unwrap_or(u32::MAX);
        self.next_due += self.period * count;
        count
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountdownState {
    pub remaining: u32,
    pub running: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// No tick source is active.
    Idle,
    Running { remaining: u32 },
    /// Reached zero on this step; the tick source has been released.
    Expired,
}

/// Local mirror of the shared turn timer.
#[derive(Debug, Default)]
pub struct TurnCountdown {
    remaining: u32,
    timer: Option<TickTimer>,
}

impl TurnCountdown {
    pub fn start(&mut self, remaining: u32, period: Duration, now: Instant) {
        self.remaining = remaining;
        self.timer = Some(TickTimer::start(period, now));
        tracing::debug!(remaining, ?period, "countdown started");
    }

    /// Releases the tick source. Returns whether one was active.
    pub fn stop(&mut self) -> bool {
        let was_running = self.timer.take().is_some();
        if was_running {
            tracing::debug!(remaining = self.remaining, "countdown stopped");
        }
        was_running
    }

    /// Adopts the authoritative shared value; the next tick counts down from it.
    pub fn resync(&mut self, shared: u32) {
        if self.remaining != shared {
            tracing::debug!(from = self.remaining, to = shared, "countdown resynced");
        }
        self.remaining = shared;
    }

    pub fn tick(&mut self) -> CountdownStep {
        if self.timer.is_none() {
            return CountdownStep::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.timer = None;
            tracing::debug!("countdown expired");
            return CountdownStep::Expired;
        }
        CountdownStep::Running {
            remaining: self.remaining,
        }
    }

    /// Applies every tick due by `now`, stopping at expiry.
    pub fn poll(&mut self, now: Instant) -> CountdownStep {
        let due = match self.timer.as_mut() {
            Some(timer) => timer.due_ticks(now),
            None => return CountdownStep::Idle,
        };
        for _ in 0..due {
            if let CountdownStep::Expired = self.tick() {
                return CountdownStep::Expired;
            }
        }
        CountdownStep::Running {
            remaining: self.remaining,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn state(&self) -> CountdownState {
        CountdownState {
            remaining: self.remaining,
            running: self.is_running(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn timer_reports_each_elapsed_period_once() {
        let start = Instant::now();
        let mut timer = TickTimer::start(SECOND, start);
        assert_eq!(timer.due_ticks(start + Duration::from_millis(999)), 0);
        assert_eq!(timer.due_ticks(start + SECOND), 1);
        assert_eq!(timer.due_ticks(start + SECOND), 0);
        assert_eq!(timer.due_ticks(start + Duration::from_millis(4500)), 3);
        assert_eq!(timer.due_ticks(start + Duration::from_millis(4999)), 0);
        assert_eq!(timer.due_ticks(start + 5 * SECOND), 1);
    }

    #[test]
    fn counts_down_and_expires_on_reaching_zero() {
        let mut countdown = TurnCountdown::default();
        countdown.start(3, SECOND, Instant::now());
        assert_eq!(countdown.tick(), CountdownStep::Running { remaining: 2 });
        assert_eq!(countdown.tick(), CountdownStep::Running { remaining: 1 });
        assert_eq!(countdown.tick(), CountdownStep::Expired);
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(), CountdownStep::Idle);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn starting_at_zero_expires_on_first_tick() {
        let mut countdown = TurnCountdown::default();
        countdown.start(0, SECOND, Instant::now());
        assert_eq!(countdown.tick(), CountdownStep::Expired);
    }

    #[test]
    fn resync_applies_before_the_next_decrement() {
        let mut countdown = TurnCountdown::default();
        countdown.start(5, SECOND, Instant::now());
        countdown.tick();
        countdown.resync(20);
        assert_eq!(countdown.remaining(), 20);
        assert_eq!(countdown.tick(), CountdownStep::Running { remaining: 19 });
    }

    #[test]
    fn stop_is_idempotent() {
        let mut countdown = TurnCountdown::default();
        countdown.start(5, SECOND, Instant::now());
        assert!(countdown.stop());
        assert!(!countdown.stop());
        assert_eq!(countdown.tick(), CountdownStep::Idle);
        assert_eq!(
            countdown.state(),
            CountdownState {
                remaining: 5,
                running: false
            }
        );
    }

    #[test]
    fn poll_stops_at_expiry_even_when_far_behind() {
        let start = Instant::now();
        let mut countdown = TurnCountdown::default();
        countdown.start(2, SECOND, start);
        assert_eq!(
            countdown.poll(start + SECOND),
            CountdownStep::Running { remaining: 1 }
        );
        assert_eq!(countdown.poll(start + 10 * SECOND), CountdownStep::Expired);
        assert_eq!(countdown.poll(start + 20 * SECOND), CountdownStep::Idle);
    }

    #[test]
    fn restart_begins_a_fresh_cycle() {
        let start = Instant::now();
        let mut countdown = TurnCountdown::default();
        countdown.start(1, SECOND, start);
        assert_eq!(countdown.tick(), CountdownStep::Expired);
        countdown.start(4, SECOND, start + 5 * SECOND);
        assert_eq!(
            countdown.poll(start + 6 * SECOND),
            CountdownStep::Running { remaining: 3 }
        );
    }
}
