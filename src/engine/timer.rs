//! Game timer
//!
//! Monotonic start/stop/reset timer with one-decimal display. There is
//! deliberately no pause/resume: a game is timed from first click to
//! completion and that is all.
//!
//! Every method takes `now` explicitly so tests can drive the clock.

use std::time::{Duration, Instant};

/// How often the UI refreshes the elapsed display
pub const DISPLAY_RESOLUTION: Duration = Duration::from_millis(100);

/// Start/stop/reset timer over a monotonic clock
#[derive(Debug, Clone, Copy, Default)]
pub struct GameTimer {
    started_at: Option<Instant>,
    /// Frozen value after `stop`; elapsed no longer advances
    stopped_elapsed: Option<Duration>,
}

impl GameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start instant. No-op if already started.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
            self.stopped_elapsed = None;
        }
    }

    /// Freeze the elapsed value without resetting it
    pub fn stop(&mut self, now: Instant) {
        if self.stopped_elapsed.is_none() {
            if let Some(started) = self.started_at {
                self.stopped_elapsed = Some(now.saturating_duration_since(started));
            }
        }
    }

    /// Back to zero, not running
    pub fn reset(&mut self) {
        self.started_at = None;
        self.stopped_elapsed = None;
    }

    /// True between `start` and `stop`
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_elapsed.is_none()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.stopped_elapsed, self.started_at) {
            (Some(frozen), _) => frozen,
            (None, Some(started)) => now.saturating_duration_since(started),
            (None, None) => Duration::ZERO,
        }
    }

    pub fn elapsed_secs(&self, now: Instant) -> f64 {
        self.elapsed(now).as_secs_f64()
    }

    /// Display string with one decimal, e.g. `Time: 12.3s`
    pub fn display(&self, now: Instant) -> String {
        format!("Time: {:.1}s", self.elapsed_secs(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_timer_is_zero() {
        let timer = GameTimer::new();
        let now = Instant::now();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(now), Duration::ZERO);
        assert_eq!(timer.display(now), "Time: 0.0s");
    }

    #[test]
    fn test_start_and_elapsed() {
        let mut timer = GameTimer::new();
        let t0 = Instant::now();
        timer.start(t0);
        assert!(timer.is_running());

        let t1 = t0 + Duration::from_millis(2_340);
        assert_eq!(timer.display(t1), "Time: 2.3s");
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut timer = GameTimer::new();
        let t0 = Instant::now();
        timer.start(t0);
        // A later start must not restart the clock
        timer.start(t0 + Duration::from_secs(5));
        assert_eq!(
            timer.elapsed(t0 + Duration::from_secs(10)),
            Duration::from_secs(10)
        );
    }

    #[test]
    fn test_stop_freezes_elapsed() {
        let mut timer = GameTimer::new();
        let t0 = Instant::now();
        timer.start(t0);
        timer.stop(t0 + Duration::from_millis(1_500));
        assert!(!timer.is_running());

        // Elapsed stays frozen regardless of how much later we ask
        let much_later = t0 + Duration::from_secs(60);
        assert_eq!(timer.elapsed(much_later), Duration::from_millis(1_500));
        assert_eq!(timer.display(much_later), "Time: 1.5s");
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let mut timer = GameTimer::new();
        let t0 = Instant::now();
        timer.start(t0);
        timer.stop(t0 + Duration::from_secs(3));
        timer.reset();

        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(9)), Duration::ZERO);
    }

    #[test]
    fn test_stop_without_start_is_noop() {
        let mut timer = GameTimer::new();
        let now = Instant::now();
        timer.stop(now);
        assert_eq!(timer.elapsed(now), Duration::ZERO);
    }
}
