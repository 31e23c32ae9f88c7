//! Active/paused time bookkeeping for a drill session.
//!
//! Every method takes the current instant explicitly so the presentation layer
//! owns the clock and tests can move time forward by hand.

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct SessionClock {
    started: Instant,
    started_at: DateTime<Local>,
    paused_total: Duration,
    paused_since: Option<Instant>,
}

impl SessionClock {
    pub fn start(now: Instant) -> Self {
        Self {
            started: now,
            started_at: Local::now(),
            paused_total: Duration::ZERO,
            paused_since: None,
        }
    }

    /// Wall-clock time the session started, for display.
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn is_paused(&self) -> bool {
        self.paused_since.is_some()
    }

    /// Pausing an already paused clock keeps the original pause start.
    pub fn pause(&mut self, now: Instant) {
        if self.paused_since.is_none() {
            self.paused_since = Some(now);
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if let Some(since) = self.paused_since.take() {
            self.paused_total += now.saturating_duration_since(since);
        }
    }

    /// Total time spent paused, including a pause still in progress.
    pub fn paused(&self, now: Instant) -> Duration {
        let running = self
            .paused_since
            .map(|since| now.saturating_duration_since(since))
            .unwrap_or_default();
        self.paused_total + running
    }

    /// Time spent drilling, pauses excluded.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
            .saturating_sub(self.paused(now))
    }
}

/// Formats a duration as `MM:SS`, or `H:MM:SS` past one hour.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_without_pause() {
        let t0 = Instant::now();
        let clock = SessionClock::start(t0);

        assert_eq!(clock.elapsed(t0 + Duration::from_secs(90)), Duration::from_secs(90));
        assert_eq!(clock.paused(t0 + Duration::from_secs(90)), Duration::ZERO);
    }

    #[test]
    fn test_pause_is_excluded_from_elapsed() {
        let t0 = Instant::now();
        let mut clock = SessionClock::start(t0);

        clock.pause(t0 + Duration::from_secs(10));
        assert!(clock.is_paused());
        // still paused: the running pause counts already
        assert_eq!(clock.elapsed(t0 + Duration::from_secs(25)), Duration::from_secs(10));

        clock.resume(t0 + Duration::from_secs(30));
        let now = t0 + Duration::from_secs(40);
        assert_eq!(clock.paused(now), Duration::from_secs(20));
        assert_eq!(clock.elapsed(now), Duration::from_secs(20));
    }

    #[test]
    fn test_double_pause_keeps_first_start() {
        let t0 = Instant::now();
        let mut clock = SessionClock::start(t0);

        clock.pause(t0 + Duration::from_secs(5));
        clock.pause(t0 + Duration::from_secs(8));
        clock.resume(t0 + Duration::from_secs(10));

        assert_eq!(clock.paused(t0 + Duration::from_secs(10)), Duration::from_secs(5));
    }

    #[test]
    fn test_resume_without_pause_is_noop() {
        let t0 = Instant::now();
        let mut clock = SessionClock::start(t0);
        clock.resume(t0 + Duration::from_secs(3));

        assert_eq!(clock.paused(t0 + Duration::from_secs(4)), Duration::ZERO);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(65)), "01:05");
        assert_eq!(format_duration(Duration::from_secs(3_725)), "1:02:05");
    }
}
