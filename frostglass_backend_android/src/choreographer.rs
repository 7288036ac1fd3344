// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `Choreographer` frame-callback tick source.
//!
//! The host calls [`Choreographer::do_frame`] from its vsync callback with
//! the frame time in nanoseconds. Each call becomes a numbered
//! [`FrameTick`] whose time is in the ticks of the surface's [`Timebase`],
//! so it lines up with [`ThemedContext::now`](crate::ThemedContext::now).
//! The refresh interval is estimated from consecutive frame times; gaps that
//! look like dropped frames do not disturb the estimate.

use frostglass_core::time::{HostTime, Timebase};
use frostglass_core::timing::FrameTick;

/// Turns vsync callbacks into [`FrameTick`]s.
#[derive(Clone, Debug)]
pub struct Choreographer {
    timebase: Timebase,
    frame_counter: u64,
    last_frame: Option<HostTime>,
    refresh_interval: Option<u64>,
}

impl Default for Choreographer {
    fn default() -> Self {
        Self::new()
    }
}

impl Choreographer {
    /// Creates a tick source with no frame history whose ticks are
    /// nanoseconds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timebase(Timebase::NANOS)
    }

    /// Creates a tick source that reports frame times in `timebase` ticks.
    ///
    /// Use the timebase of the [`ThemedContext`](crate::ThemedContext) the
    /// ticks are delivered to.
    #[must_use]
    pub fn with_timebase(timebase: Timebase) -> Self {
        Self {
            timebase,
            frame_counter: 0,
            last_frame: None,
            refresh_interval: None,
        }
    }

    /// Returns the timebase frame times are converted to.
    #[must_use]
    pub fn timebase(&self) -> Timebase {
        self.timebase
    }

    /// Handles one vsync callback.
    ///
    /// A frame time earlier than the previous one is clamped to it, so ticks
    /// never go backwards.
    pub fn do_frame(&mut self, frame_time_nanos: u64) -> FrameTick {
        let mut now = HostTime(self.timebase.nanos_to_ticks(frame_time_nanos));
        if let Some(last) = self.last_frame {
            now = now.max(last);
            let delta = now.saturating_duration_since(last).ticks();
            self.refresh_interval = match self.refresh_interval {
                // More than one and a half intervals means frames were
                // skipped; keep the existing estimate.
                Some(est) if delta > est + est / 2 => Some(est),
                _ if delta == 0 => self.refresh_interval,
                _ => Some(delta),
            };
        }
        self.last_frame = Some(now);

        let frame_index = self.frame_counter;
        self.frame_counter += 1;
        FrameTick {
            now,
            refresh_interval: self.refresh_interval,
            frame_index,
        }
    }

    /// Returns the current refresh-interval estimate in ticks.
    #[must_use]
    pub fn refresh_interval(&self) -> Option<u64> {
        self.refresh_interval
    }

    /// Returns how many frames have been delivered.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }
}
