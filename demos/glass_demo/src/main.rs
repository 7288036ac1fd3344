// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated host session that exercises the glass view end to end.
//!
//! Mounts the home screen on the native backend, resumes the host, runs
//! synthetic vsync frames with two taps, navigates to the second screen,
//! backgrounds and destroys the host. Events go to both a
//! [`PrettyPrintSink`](frostglass_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](frostglass_debug::recorder::RecorderSink); the recording
//! is then exported as Chrome trace JSON.

use std::cell::RefCell;
use std::fs::File;
use std::io::BufWriter;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use frostglass::{Screen, ScreenWrapper, ViewBackend, view_backend};
use frostglass_backend_android::{
    Choreographer, LifecycleRegistry, ThemedContext, ViewManagerRegistry,
};
use frostglass_core::lifecycle::HostLifecycleState;
use frostglass_core::time::{HostTime, Timebase};
use frostglass_core::trace::{
    CompositionEvent, FrameEvent, GuardEvent, SurfaceEvent, TapEvent, TraceSink,
};
use frostglass_debug::pretty::PrettyPrintSink;
use frostglass_debug::recorder::RecorderSink;
use kurbo::{Point, Size};

/// 16.6ms refresh interval in nanoseconds (≈60 Hz).
const REFRESH_INTERVAL_NS: u64 = 16_666_667;
const VIEWPORT: Size = Size::new(1080.0, 2400.0);
const DENSITY: f64 = 2.75;

static SIM_NOW: AtomicU64 = AtomicU64::new(1_000_000_000);

fn sim_now() -> HostTime {
    HostTime(SIM_NOW.load(Ordering::Relaxed))
}

/// Forwards every event to both sinks.
struct Tee {
    pretty: PrettyPrintSink,
    recorder: RecorderSink,
}

impl TraceSink for Tee {
    fn on_surface(&mut self, e: &SurfaceEvent) {
        self.pretty.on_surface(e);
        self.recorder.on_surface(e);
    }

    fn on_guard(&mut self, e: &GuardEvent) {
        self.pretty.on_guard(e);
        self.recorder.on_guard(e);
    }

    fn on_composition(&mut self, e: &CompositionEvent) {
        self.pretty.on_composition(e);
        self.recorder.on_composition(e);
    }

    fn on_tap(&mut self, e: &TapEvent) {
        self.pretty.on_tap(e);
        self.recorder.on_tap(e);
    }

    fn on_frame(&mut self, e: &FrameEvent) {
        self.pretty.on_frame(e);
        self.recorder.on_frame(e);
    }
}

/// Runs `count` vsyncs against `screen`, tapping the panel center on the
/// listed frame offsets.
fn run_frames(
    choreographer: &mut Choreographer,
    screen: &ScreenWrapper,
    count: u64,
    taps: &[u64],
) -> u64 {
    let center = Point::new(VIEWPORT.width / 2.0, VIEWPORT.height / 2.0);
    let mut rendered = 0;
    for offset in 0..count {
        let now = SIM_NOW.fetch_add(REFRESH_INTERVAL_NS, Ordering::Relaxed) + REFRESH_INTERVAL_NS;
        let tick = choreographer.do_frame(now);
        if taps.contains(&offset) {
            let _ = screen.glass().on_tap(center);
        }
        if screen.glass().on_frame(&tick).is_some() {
            rendered += 1;
        }
    }
    rendered
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let timebase = Timebase::NANOS;
    println!("process backend: {:?} (demo forces native)", view_backend());

    let sink = Rc::new(RefCell::new(Tee {
        pretty: PrettyPrintSink::new(Box::new(std::io::stdout()), timebase),
        recorder: RecorderSink::new(),
    }));

    let lifecycle = LifecycleRegistry::new();
    let context = ThemedContext::new(lifecycle.clone())
        .with_density(DENSITY)
        .with_clock(sim_now, timebase)
        .with_trace_sink(sink.clone());
    let registry = ViewManagerRegistry::with_glass_package();
    let mut choreographer = context.choreographer();

    // -- home screen -------------------------------------------------------
    let mut home =
        ScreenWrapper::mount_with(Screen::Home, ViewBackend::NativeGlassView, &registry, &context)?;
    home.layout(VIEWPORT);
    home.on_attached();
    let _ = lifecycle.move_to(HostLifecycleState::Resumed);

    let rendered = run_frames(&mut choreographer, &home, 150, &[30, 90]);
    println!("{}: {rendered} frames", home.screen().title());

    // -- navigate ----------------------------------------------------------
    let Some(next) = home.screen().button_target() else {
        return Ok(());
    };
    let mut second =
        ScreenWrapper::mount_with(next, ViewBackend::NativeGlassView, &registry, &context)?;
    second.layout(VIEWPORT);
    home.on_detached();
    second.on_attached();
    let rendered = run_frames(&mut choreographer, &second, 60, &[]);
    println!("{}: {rendered} frames", second.screen().title());

    // -- background, resume, destroy ---------------------------------------
    let _ = lifecycle.move_to(HostLifecycleState::Created);
    let rendered = run_frames(&mut choreographer, &second, 30, &[]);
    println!("backgrounded: {rendered} frames");
    let _ = lifecycle.move_to(HostLifecycleState::Resumed);
    let rendered = run_frames(&mut choreographer, &second, 30, &[]);
    println!("resumed: {rendered} frames");
    let _ = lifecycle.move_to(HostLifecycleState::Destroyed);
    let rendered = run_frames(&mut choreographer, &second, 30, &[]);
    println!("destroyed: {rendered} frames");

    drop(second);
    drop(home);
    drop(context);

    // -- export Chrome trace -----------------------------------------------
    let path = "trace.json";
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let tee = sink.borrow();
    frostglass_debug::chrome::export(tee.recorder.as_bytes(), timebase, &mut writer)?;

    println!("Wrote {path}");
    Ok(())
}
