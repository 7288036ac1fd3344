// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Restartable linear rotation.

use crate::time::{Duration, HostTime, Timebase};

/// Parameters of an [`InfiniteRotation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RotationSpec {
    /// Length of one full 360° cycle, in milliseconds.
    pub period_millis: u64,
}

impl RotationSpec {
    /// The glass border sweep: one revolution every 2.5 seconds.
    pub const GLASS_BORDER: Self = Self {
        period_millis: 2_500,
    };
}

/// A linear 0°→360° sweep that restarts at 0° at the end of every period.
///
/// The first call to [`sample`](Self::sample) fixes the cycle origin, so a
/// freshly created rotation always reports 0° on its first frame. Within a
/// cycle the angle never decreases; a host clock that steps backwards is
/// clamped to the latest time already observed.
#[derive(Clone, Copy, Debug)]
pub struct InfiniteRotation {
    period: Duration,
    origin: Option<HostTime>,
    latest: HostTime,
    angle: f64,
}

impl InfiniteRotation {
    /// Creates a rotation from a spec, expressed in `timebase` ticks.
    ///
    /// # Panics
    ///
    /// Panics if the period is zero.
    #[must_use]
    pub fn new(spec: RotationSpec, timebase: Timebase) -> Self {
        let period = Duration::from_millis(spec.period_millis, timebase);
        assert!(period.ticks() > 0, "rotation period must be non-zero");
        Self {
            period,
            origin: None,
            latest: HostTime(0),
            angle: 0.0,
        }
    }

    /// Samples the angle in degrees at `now`, in `[0, 360)`.
    pub fn sample(&mut self, now: HostTime) -> f64 {
        let origin = *self.origin.get_or_insert(now);
        self.latest = self.latest.max(now);
        let elapsed = self.latest.saturating_duration_since(origin).ticks();
        let phase = elapsed % self.period.ticks();
        self.angle = phase as f64 / self.period.ticks() as f64 * 360.0;
        self.angle
    }

    /// Returns the angle produced by the most recent sample.
    #[inline]
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Returns how many full cycles have completed as of the latest sample.
    #[must_use]
    pub fn cycles_completed(&self) -> u64 {
        match self.origin {
            Some(origin) => {
                self.latest.saturating_duration_since(origin).ticks() / self.period.ticks()
            }
            None => 0,
        }
    }

    /// Returns the cycle length in ticks.
    #[inline]
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}
