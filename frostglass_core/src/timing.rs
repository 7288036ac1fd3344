// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame ticks delivered by the host's frame scheduler.
//!
//! The host (e.g. Android's `Choreographer`) calls back once per display
//! refresh. Backends turn each callback into a [`FrameTick`] and hand it to
//! every surface that asked for a frame. Animations are sampled at
//! [`FrameTick::now`]; nothing in this crate reads a clock on its own.

use crate::time::{Duration, HostTime};

/// A frame opportunity delivered by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTick {
    /// Vsync time of this frame.
    pub now: HostTime,
    /// Display refresh interval in host-time ticks, if known.
    pub refresh_interval: Option<u64>,
    /// Monotonically increasing frame counter.
    pub frame_index: u64,
}

impl FrameTick {
    /// Returns the time elapsed since `previous`, or zero if the clock did not
    /// advance.
    #[inline]
    #[must_use]
    pub const fn elapsed_since(&self, previous: HostTime) -> Duration {
        self.now.saturating_duration_since(previous)
    }
}
