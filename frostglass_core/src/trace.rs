// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for glass surfaces.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! surfaces call as they are created, attached, gated by the lifecycle,
//! tapped, and ticked. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::lifecycle::{GuardTransition, HostLifecycleState};
use crate::surface::SurfaceId;
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What happened to a host surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceEventKind {
    /// The provider created the surface.
    Created,
    /// The surface entered a window.
    Attached,
    /// The surface left its window.
    Detached,
    /// The surface was torn down. Emitted once.
    Disposed,
}

/// Whether the effect renderer was mounted or unmounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompositionKind {
    /// A fresh render context was created.
    Mounted,
    /// The render context was dropped.
    Unmounted,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted on surface creation, attach, detach and disposal.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceEvent {
    /// Which surface.
    pub surface: SurfaceId,
    /// What happened.
    pub kind: SurfaceEventKind,
    /// Host time of the event.
    pub timestamp: HostTime,
}

/// Emitted when a host lifecycle notification reaches a surface's guard.
#[derive(Clone, Copy, Debug)]
pub struct GuardEvent {
    /// Which surface.
    pub surface: SurfaceId,
    /// The host state that was reported.
    pub host: HostLifecycleState,
    /// What the guard did with it.
    pub transition: GuardTransition,
    /// Host time of the notification.
    pub timestamp: HostTime,
}

/// Emitted when the effect renderer is mounted or unmounted.
#[derive(Clone, Copy, Debug)]
pub struct CompositionEvent {
    /// Which surface.
    pub surface: SurfaceId,
    /// Mounted or unmounted.
    pub kind: CompositionKind,
    /// Host time of the change.
    pub timestamp: HostTime,
}

/// Emitted when a tap toggles the press state.
#[derive(Clone, Copy, Debug)]
pub struct TapEvent {
    /// Which surface.
    pub surface: SurfaceId,
    /// Press state after the toggle.
    pub pressed: bool,
    /// Scale the spring is now heading to.
    pub target_scale: f64,
    /// Host time of the tap.
    pub timestamp: HostTime,
}

/// Per-frame summary for one surface.
#[derive(Clone, Copy, Debug)]
pub struct FrameEvent {
    /// Which surface.
    pub surface: SurfaceId,
    /// Frame counter from the tick.
    pub frame_index: u64,
    /// Host time of the tick.
    pub now: HostTime,
    /// Border gradient angle in degrees.
    pub angle_degrees: f64,
    /// Current press scale.
    pub scale: f64,
    /// Number of render-plan items recomputed this frame.
    pub updated_items: u32,
    /// Number of damage rectangles, zero when damage is full or empty.
    pub damage_rects: u32,
    /// Whether the whole surface was damaged.
    pub full_damage: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from glass surfaces.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called on surface creation, attach, detach and disposal.
    fn on_surface(&mut self, e: &SurfaceEvent) {
        _ = e;
    }

    /// Called when a lifecycle notification reaches a guard.
    fn on_guard(&mut self, e: &GuardEvent) {
        _ = e;
    }

    /// Called when the effect renderer is mounted or unmounted.
    fn on_composition(&mut self, e: &CompositionEvent) {
        _ = e;
    }

    /// Called when a tap toggles the press state.
    fn on_tap(&mut self, e: &TapEvent) {
        _ = e;
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, e: &FrameEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`SurfaceEvent`].
    #[inline]
    pub fn surface(&mut self, e: &SurfaceEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_surface(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GuardEvent`].
    #[inline]
    pub fn guard(&mut self, e: &GuardEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_guard(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CompositionEvent`].
    #[inline]
    pub fn composition(&mut self, e: &CompositionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_composition(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TapEvent`].
    #[inline]
    pub fn tap(&mut self, e: &TapEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tap(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameEvent`].
    #[inline]
    pub fn frame(&mut self, e: &FrameEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
