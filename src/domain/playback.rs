// SPDX-License-Identifier: MPL-2.0
//! Playback value objects.

use std::time::Duration;

/// Playback progress of the current story, always within 0–100 %.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f32);

impl Progress {
    pub const ZERO: Self = Self(0.0);
    pub const COMPLETE: Self = Self(100.0);

    /// Creates a progress value, clamping to 0–100. NaN maps to zero.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::ZERO;
        }
        Self(percent.clamp(0.0, 100.0))
    }

    /// Linear progress of `elapsed` over `total`.
    ///
    /// Derived from wall-clock time, not tick count, so it does not drift
    /// when ticks arrive late.
    #[must_use]
    pub fn from_elapsed(elapsed: Duration, total: Duration) -> Self {
        if total.is_zero() {
            return Self::COMPLETE;
        }
        Self::new((elapsed.as_secs_f32() / total.as_secs_f32()) * 100.0)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Progress as a 0.0–1.0 fraction, handy for drawing.
    #[must_use]
    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 100.0
    }
}

/// Identity of the viewer's current timer set.
///
/// Bumped whenever timers are cancelled or re-armed; a tick that carries an
/// older generation belongs to a superseded story and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}
