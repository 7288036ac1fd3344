// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records, one tag byte followed by
//! the event's fields. Floats are stored as their IEEE-754 bits. [`decode`]
//! reads them back as an iterator of [`RecordedEvent`].

use frostglass_core::lifecycle::{GuardTransition, HostLifecycleState};
use frostglass_core::surface::SurfaceId;
use frostglass_core::time::HostTime;
use frostglass_core::trace::{
    CompositionEvent, CompositionKind, FrameEvent, GuardEvent, SurfaceEvent, SurfaceEventKind,
    TapEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_SURFACE: u8 = 1;
const TAG_GUARD: u8 = 2;
const TAG_COMPOSITION: u8 = 3;
const TAG_TAP: u8 = 4;
const TAG_FRAME: u8 = 5;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_header(&mut self, tag: u8, surface: SurfaceId) {
        self.write_u8(tag);
        self.write_u32(surface.0);
    }
}

fn surface_kind_code(kind: SurfaceEventKind) -> u8 {
    match kind {
        SurfaceEventKind::Created => 0,
        SurfaceEventKind::Attached => 1,
        SurfaceEventKind::Detached => 2,
        SurfaceEventKind::Disposed => 3,
    }
}

fn host_state_code(state: HostLifecycleState) -> u8 {
    match state {
        HostLifecycleState::Destroyed => 0,
        HostLifecycleState::Initialized => 1,
        HostLifecycleState::Created => 2,
        HostLifecycleState::Started => 3,
        HostLifecycleState::Resumed => 4,
    }
}

fn transition_code(transition: GuardTransition) -> u8 {
    match transition {
        GuardTransition::Unchanged => 0,
        GuardTransition::BecameRenderable => 1,
        GuardTransition::LostRenderable => 2,
        GuardTransition::Destroyed => 3,
        GuardTransition::Ignored => 4,
    }
}

impl TraceSink for RecorderSink {
    fn on_surface(&mut self, e: &SurfaceEvent) {
        self.write_header(TAG_SURFACE, e.surface);
        self.write_u8(surface_kind_code(e.kind));
        self.write_u64(e.timestamp.ticks());
    }

    fn on_guard(&mut self, e: &GuardEvent) {
        self.write_header(TAG_GUARD, e.surface);
        self.write_u8(host_state_code(e.host));
        self.write_u8(transition_code(e.transition));
        self.write_u64(e.timestamp.ticks());
    }

    fn on_composition(&mut self, e: &CompositionEvent) {
        self.write_header(TAG_COMPOSITION, e.surface);
        self.write_u8(match e.kind {
            CompositionKind::Mounted => 0,
            CompositionKind::Unmounted => 1,
        });
        self.write_u64(e.timestamp.ticks());
    }

    fn on_tap(&mut self, e: &TapEvent) {
        self.write_header(TAG_TAP, e.surface);
        self.write_u8(u8::from(e.pressed));
        self.write_f64(e.target_scale);
        self.write_u64(e.timestamp.ticks());
    }

    fn on_frame(&mut self, e: &FrameEvent) {
        self.write_header(TAG_FRAME, e.surface);
        self.write_u64(e.frame_index);
        self.write_u64(e.now.ticks());
        self.write_f64(e.angle_degrees);
        self.write_f64(e.scale);
        self.write_u32(e.updated_items);
        self.write_u32(e.damage_rects);
        self.write_u8(u8::from(e.full_damage));
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A [`SurfaceEvent`].
    Surface(SurfaceEvent),
    /// A [`GuardEvent`].
    Guard(GuardEvent),
    /// A [`CompositionEvent`].
    Composition(CompositionEvent),
    /// A [`TapEvent`].
    Tap(TapEvent),
    /// A [`FrameEvent`].
    Frame(FrameEvent),
}

impl RecordedEvent {
    /// Returns the surface the event belongs to.
    #[must_use]
    pub fn surface(&self) -> SurfaceId {
        match self {
            Self::Surface(e) => e.surface,
            Self::Guard(e) => e.surface,
            Self::Composition(e) => e.surface,
            Self::Tap(e) => e.surface,
            Self::Frame(e) => e.surface,
        }
    }
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first truncated record, unknown tag, or unknown
/// enum code.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let end = self.pos.checked_add(N)?;
        let bytes = self.data.get(self.pos..end)?.try_into().ok()?;
        self.pos = end;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[v]| v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_time(&mut self) -> Option<HostTime> {
        self.read_u64().map(HostTime)
    }

    fn read_surface(&mut self) -> Option<SurfaceId> {
        self.read_u32().map(SurfaceId)
    }

    fn read_surface_kind(&mut self) -> Option<SurfaceEventKind> {
        Some(match self.read_u8()? {
            0 => SurfaceEventKind::Created,
            1 => SurfaceEventKind::Attached,
            2 => SurfaceEventKind::Detached,
            3 => SurfaceEventKind::Disposed,
            _ => return None,
        })
    }

    fn read_host_state(&mut self) -> Option<HostLifecycleState> {
        Some(match self.read_u8()? {
            0 => HostLifecycleState::Destroyed,
            1 => HostLifecycleState::Initialized,
            2 => HostLifecycleState::Created,
            3 => HostLifecycleState::Started,
            4 => HostLifecycleState::Resumed,
            _ => return None,
        })
    }

    fn read_transition(&mut self) -> Option<GuardTransition> {
        Some(match self.read_u8()? {
            0 => GuardTransition::Unchanged,
            1 => GuardTransition::BecameRenderable,
            2 => GuardTransition::LostRenderable,
            3 => GuardTransition::Destroyed,
            4 => GuardTransition::Ignored,
            _ => return None,
        })
    }

    fn decode_surface(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Surface(SurfaceEvent {
            surface: self.read_surface()?,
            kind: self.read_surface_kind()?,
            timestamp: self.read_time()?,
        }))
    }

    fn decode_guard(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Guard(GuardEvent {
            surface: self.read_surface()?,
            host: self.read_host_state()?,
            transition: self.read_transition()?,
            timestamp: self.read_time()?,
        }))
    }

    fn decode_composition(&mut self) -> Option<RecordedEvent> {
        let surface = self.read_surface()?;
        let kind = match self.read_u8()? {
            0 => CompositionKind::Mounted,
            1 => CompositionKind::Unmounted,
            _ => return None,
        };
        Some(RecordedEvent::Composition(CompositionEvent {
            surface,
            kind,
            timestamp: self.read_time()?,
        }))
    }

    fn decode_tap(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Tap(TapEvent {
            surface: self.read_surface()?,
            pressed: self.read_u8()? != 0,
            target_scale: self.read_f64()?,
            timestamp: self.read_time()?,
        }))
    }

    fn decode_frame(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Frame(FrameEvent {
            surface: self.read_surface()?,
            frame_index: self.read_u64()?,
            now: self.read_time()?,
            angle_degrees: self.read_f64()?,
            scale: self.read_f64()?,
            updated_items: self.read_u32()?,
            damage_rects: self.read_u32()?,
            full_damage: self.read_u8()? != 0,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_SURFACE => self.decode_surface(),
            TAG_GUARD => self.decode_guard(),
            TAG_COMPOSITION => self.decode_composition(),
            TAG_TAP => self.decode_tap(),
            TAG_FRAME => self.decode_frame(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
