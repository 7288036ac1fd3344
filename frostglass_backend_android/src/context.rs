// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The requesting host context.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use frostglass_core::density::Density;
use frostglass_core::surface::SurfaceId;
use frostglass_core::time::{HostTime, Timebase};
use frostglass_core::trace::{TraceSink, Tracer};

use crate::choreographer::Choreographer;
use crate::lifecycle::LifecycleRegistry;

/// A trace sink shared by every surface created from one context.
pub type SharedTraceSink = Rc<RefCell<dyn TraceSink>>;

/// What a view manager receives when asked for a new view.
///
/// Mirrors the themed host context: it carries the lifecycle owner the view
/// must observe, the display density (if the host reported one), the host
/// clock, and an optional diagnostics sink. Cloning shares all of these,
/// including the surface-id counter.
#[derive(Clone)]
pub struct ThemedContext {
    lifecycle: LifecycleRegistry,
    density: Option<Density>,
    timebase: Timebase,
    clock: fn() -> HostTime,
    trace: Option<SharedTraceSink>,
    next_surface: Rc<Cell<u32>>,
}

impl ThemedContext {
    /// Creates a context observing `lifecycle`, with no density and the
    /// process host clock.
    #[must_use]
    pub fn new(lifecycle: LifecycleRegistry) -> Self {
        Self {
            lifecycle,
            density: None,
            timebase: crate::time::timebase(),
            clock: crate::time::now,
            trace: None,
            next_surface: Rc::new(Cell::new(0)),
        }
    }

    /// Sets the display density from a host-reported scale.
    ///
    /// Unusable values (zero, negative, non-finite) leave the density
    /// unset, which lays glass out at one pixel per dp.
    #[must_use]
    pub fn with_density(mut self, scale: f64) -> Self {
        self.density = Density::new(scale);
        self
    }

    /// Replaces the host clock and its timebase.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> HostTime, timebase: Timebase) -> Self {
        self.clock = clock;
        self.timebase = timebase;
        self
    }

    /// Routes surface diagnostics to `sink`.
    #[must_use]
    pub fn with_trace_sink(mut self, sink: SharedTraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Returns the lifecycle owner.
    #[must_use]
    pub fn lifecycle(&self) -> &LifecycleRegistry {
        &self.lifecycle
    }

    /// Returns the display density, if usable.
    #[must_use]
    pub fn density(&self) -> Option<Density> {
        self.density
    }

    /// Returns the timebase of [`now`](Self::now).
    #[must_use]
    pub fn timebase(&self) -> Timebase {
        self.timebase
    }

    /// Reads the host clock.
    #[must_use]
    pub fn now(&self) -> HostTime {
        (self.clock)()
    }

    /// Creates a vsync tick source whose frame times are in this context's
    /// timebase.
    #[must_use]
    pub fn choreographer(&self) -> Choreographer {
        Choreographer::with_timebase(self.timebase)
    }

    pub(crate) fn allocate_surface_id(&self) -> SurfaceId {
        let id = self.next_surface.get();
        self.next_surface.set(id.wrapping_add(1));
        SurfaceId(id)
    }

    /// Runs `emit` against the shared sink, if one is set and not busy.
    pub(crate) fn trace(&self, emit: impl FnOnce(&mut Tracer<'_>)) {
        let Some(sink) = &self.trace else {
            return;
        };
        if let Ok(mut sink) = sink.try_borrow_mut() {
            let mut tracer = Tracer::new(&mut *sink);
            emit(&mut tracer);
        }
    }
}

impl fmt::Debug for ThemedContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemedContext")
            .field("lifecycle", &self.lifecycle)
            .field("density", &self.density)
            .field("timebase", &self.timebase)
            .field("trace", &self.trace.is_some())
            .finish_non_exhaustive()
    }
}
