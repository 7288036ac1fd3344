// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are converted to microseconds using a [`Timebase`].

use std::io::Write;

use frostglass_core::time::{HostTime, Timebase};
use frostglass_core::trace::{
    CompositionEvent, CompositionKind, FrameEvent, GuardEvent, SurfaceEvent, SurfaceEventKind,
    TapEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
    frames: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self::with_writer(Box::new(std::io::stderr()), timebase)
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self::with_writer(writer, timebase)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self {
            writer,
            timebase,
            frames: true,
        }
    }

    /// Skips per-frame lines, keeping lifecycle and input events.
    #[must_use]
    pub fn without_frames(mut self) -> Self {
        self.frames = false;
        self
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn host_us(&self, t: HostTime) -> f64 {
        self.timebase.ticks_to_nanos(t.ticks()) as f64 / 1000.0
    }
}

fn surface_kind_name(kind: SurfaceEventKind) -> &'static str {
    match kind {
        SurfaceEventKind::Created => "created",
        SurfaceEventKind::Attached => "attached",
        SurfaceEventKind::Detached => "detached",
        SurfaceEventKind::Disposed => "disposed",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_surface(&mut self, e: &SurfaceEvent) {
        let _ = writeln!(
            self.writer,
            "[surface] id={} {} at {:.1}µs",
            e.surface.0,
            surface_kind_name(e.kind),
            self.host_us(e.timestamp),
        );
    }

    fn on_guard(&mut self, e: &GuardEvent) {
        let _ = writeln!(
            self.writer,
            "[guard] id={} host={:?} {:?} at {:.1}µs",
            e.surface.0,
            e.host,
            e.transition,
            self.host_us(e.timestamp),
        );
    }

    fn on_composition(&mut self, e: &CompositionEvent) {
        let what = match e.kind {
            CompositionKind::Mounted => "mounted",
            CompositionKind::Unmounted => "unmounted",
        };
        let _ = writeln!(
            self.writer,
            "[compose] id={} {what} at {:.1}µs",
            e.surface.0,
            self.host_us(e.timestamp),
        );
    }

    fn on_tap(&mut self, e: &TapEvent) {
        let _ = writeln!(
            self.writer,
            "[tap] id={} pressed={} target={:.2} at {:.1}µs",
            e.surface.0,
            e.pressed,
            e.target_scale,
            self.host_us(e.timestamp),
        );
    }

    fn on_frame(&mut self, e: &FrameEvent) {
        if !self.frames {
            return;
        }
        let damage = if e.full_damage {
            "full".to_owned()
        } else {
            e.damage_rects.to_string()
        };
        let _ = writeln!(
            self.writer,
            "[frame] id={} frame={} angle={:.1}° scale={:.3} items={} damage={damage}",
            e.surface.0,
            e.frame_index,
            e.angle_degrees,
            e.scale,
            e.updated_items,
        );
    }
}
