// SPDX-License-Identifier: MPL-2.0
//! Pausable playback clock.

use std::time::{Duration, Instant};

/// Wall-clock playback time of one story, excluding paused spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackClock {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl PlaybackClock {
    /// Starts the clock from zero.
    #[must_use]
    pub fn started(now: Instant) -> Self {
        Self {
            accumulated: Duration::ZERO,
            running_since: Some(now),
        }
    }

    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.accumulated
            + self
                .running_since
                .map_or(Duration::ZERO, |since| now.saturating_duration_since(since))
    }

    /// Freezes the clock, keeping the time played so far.
    pub fn pause(&mut self, now: Instant) {
        if self.running_since.is_some() {
            self.accumulated = self.elapsed(now);
            self.running_since = None;
        }
    }

    /// Continues from the frozen elapsed time.
    pub fn resume(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn default_clock_is_stopped_at_zero() {
        let clock = PlaybackClock::default();
        let t0 = Instant::now();
        assert_eq!(clock.elapsed(t0), Duration::ZERO);
        assert_eq!(clock.elapsed(t0 + ms(500)), Duration::ZERO);
    }

    #[test]
    fn elapsed_excludes_paused_time() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::started(t0);

        clock.pause(t0 + ms(1000));
        assert_eq!(clock.elapsed(t0 + ms(4000)), ms(1000));

        clock.resume(t0 + ms(4000));
        assert_eq!(clock.elapsed(t0 + ms(4500)), ms(1500));
    }

    #[test]
    fn pause_and_resume_are_idempotent() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::started(t0);
        clock.pause(t0 + ms(200));
        clock.pause(t0 + ms(900));
        assert_eq!(clock.elapsed(t0 + ms(900)), ms(200));

        clock.resume(t0 + ms(1000));
        clock.resume(t0 + ms(3000));
        assert_eq!(clock.elapsed(t0 + ms(3000)), ms(2200));
    }

    #[test]
    fn earlier_instant_does_not_underflow() {
        let t0 = Instant::now();
        let clock = PlaybackClock::started(t0 + ms(100));
        assert_eq!(clock.elapsed(t0), Duration::ZERO);
    }
}
