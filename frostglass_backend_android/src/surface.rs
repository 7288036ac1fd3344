// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host surface for one glass panel.
//!
//! A [`GlassSurface`] is what the view manager hands back to the host view
//! hierarchy. It combines three inputs:
//!
//! - attach / detach notifications from the view hierarchy,
//! - host lifecycle notifications, through a [`LifecycleGuard`],
//! - frame callbacks and taps,
//!
//! and decides when a [`GlassEffect`] exists. The effect is only composed
//! while the surface is attached *and* the guard is renderable; frames are
//! only produced while it exists.
//!
//! A surface's lifecycle observer and its effect live together in a
//! *session*. Tearing down takes the session, which drops the subscription
//! (removing the observer) and the effect in one step.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use frostglass_core::lifecycle::{
    GuardTransition, HostLifecycleState, LifecycleGuard, LifecycleState,
};
use frostglass_core::surface::{AttachState, SurfaceId};
use frostglass_core::timing::FrameTick;
use frostglass_core::trace::{
    CompositionEvent, CompositionKind, FrameEvent, GuardEvent, SurfaceEvent, SurfaceEventKind,
    TapEvent,
};
use frostglass_render::RenderPlan;
use frostglass_render::effect::{FrameOutput, GlassEffect};
use kurbo::{Point, Size};

use crate::context::ThemedContext;
use crate::lifecycle::LifecycleSubscription;

/// What happens to the composition when the surface leaves its window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompositionStrategy {
    /// Detaching removes the lifecycle observer and disposes the effect.
    /// Re-attaching subscribes again and recomposes if renderable.
    #[default]
    DisposeOnDetachedFromWindow,
    /// Detaching only stops frames. The effect survives until the host
    /// lifecycle is destroyed or the surface is disposed.
    DisposeOnLifecycleDestroyed,
}

struct Session {
    // Declared first so the observer is removed before the effect drops.
    subscription: LifecycleSubscription,
    effect: Option<GlassEffect>,
}

struct SurfaceInner {
    id: SurfaceId,
    context: ThemedContext,
    strategy: CompositionStrategy,
    attach: AttachState,
    guard: LifecycleGuard,
    // Last host state the guard observed while subscribed.
    last_host: Option<HostLifecycleState>,
    size: Size,
    session: Option<Session>,
    disposed: bool,
}

impl SurfaceInner {
    fn effect_mut(&mut self) -> Option<&mut GlassEffect> {
        self.session.as_mut().and_then(|s| s.effect.as_mut())
    }

    fn is_composed(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.effect.is_some())
    }

    fn can_render(&self) -> bool {
        !self.disposed && self.attach.is_attached() && self.guard.is_renderable()
    }

    fn emit_surface(&self, kind: SurfaceEventKind) {
        let e = SurfaceEvent {
            surface: self.id,
            kind,
            timestamp: self.context.now(),
        };
        self.context.trace(|t| t.surface(&e));
    }

    fn emit_composition(&self, kind: CompositionKind) {
        let e = CompositionEvent {
            surface: self.id,
            kind,
            timestamp: self.context.now(),
        };
        self.context.trace(|t| t.composition(&e));
    }

    /// Mounts a fresh effect if rendering is permitted and none exists.
    fn compose(&mut self) {
        if !self.can_render() || self.is_composed() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.effect = Some(GlassEffect::new(
            self.id,
            self.size,
            self.context.density(),
            self.context.timebase(),
        ));
        self.emit_composition(CompositionKind::Mounted);
    }

    /// Drops the effect but keeps observing the lifecycle.
    fn unmount(&mut self) {
        let dropped = self
            .session
            .as_mut()
            .and_then(|s| s.effect.take())
            .is_some();
        if dropped {
            self.emit_composition(CompositionKind::Unmounted);
        }
    }

    /// Removes the observer and drops the effect together.
    fn teardown(&mut self) {
        if let Some(session) = self.session.take() {
            let was_composed = session.effect.is_some();
            drop(session);
            if was_composed {
                self.emit_composition(CompositionKind::Unmounted);
            }
        }
    }

    fn on_lifecycle(&mut self, host: HostLifecycleState) {
        self.last_host = Some(host);
        let transition = self.guard.observe(host);
        let e = GuardEvent {
            surface: self.id,
            host,
            transition,
            timestamp: self.context.now(),
        };
        self.context.trace(|t| t.guard(&e));
        match transition {
            GuardTransition::BecameRenderable => self.compose(),
            GuardTransition::LostRenderable => self.unmount(),
            GuardTransition::Destroyed => self.teardown(),
            GuardTransition::Unchanged | GuardTransition::Ignored => {}
        }
    }

    /// Applies a host state that was dispatched while the surface was
    /// borrowed.
    fn resync(&mut self) {
        if self.session.is_none() {
            return;
        }
        let current = self.context.lifecycle().current_state();
        if self.last_host != Some(current) {
            self.on_lifecycle(current);
        }
    }
}

/// Subscribes `inner` to its context's lifecycle and seeds the guard.
///
/// Does nothing once the guard is destroyed or a session already exists.
fn subscribe(this: &Rc<RefCell<SurfaceInner>>) {
    let mut inner = this.borrow_mut();
    if inner.session.is_some() || inner.guard.is_destroyed() || inner.disposed {
        return;
    }
    let weak: Weak<RefCell<SurfaceInner>> = Rc::downgrade(this);
    let subscription = inner.context.lifecycle().add_observer(move |host| {
        let Some(strong) = weak.upgrade() else {
            return;
        };
        // A busy surface misses this step and resyncs from
        // `current_state` on its next frame, tap or frame request.
        if let Ok(mut inner) = strong.try_borrow_mut() {
            inner.on_lifecycle(host);
        }
    });
    inner.session = Some(Session {
        subscription,
        effect: None,
    });
    let current = inner.context.lifecycle().current_state();
    inner.on_lifecycle(current);
}

/// One mounted glass panel.
///
/// Single-threaded: all calls come from the host UI thread. Dropping the
/// surface disposes it.
pub struct GlassSurface {
    inner: Rc<RefCell<SurfaceInner>>,
}

impl GlassSurface {
    /// Creates a detached surface observing `context`'s lifecycle.
    ///
    /// The lifecycle observer is registered before anything is composed.
    #[must_use]
    pub fn new(context: &ThemedContext, strategy: CompositionStrategy) -> Self {
        let inner = Rc::new(RefCell::new(SurfaceInner {
            id: context.allocate_surface_id(),
            context: context.clone(),
            strategy,
            attach: AttachState::Detached,
            guard: LifecycleGuard::new(),
            last_host: None,
            size: Size::ZERO,
            session: None,
            disposed: false,
        }));
        inner.borrow().emit_surface(SurfaceEventKind::Created);
        subscribe(&inner);
        Self { inner }
    }

    /// The view entered a window.
    ///
    /// Composes the effect if the lifecycle permits. A second attach without
    /// a detach in between is ignored.
    pub fn on_attached(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || inner.attach.is_attached() {
                return;
            }
            inner.attach = AttachState::Attached;
            inner.emit_surface(SurfaceEventKind::Attached);
        }
        subscribe(&self.inner);
        let mut inner = self.inner.borrow_mut();
        inner.resync();
        inner.compose();
    }

    /// The view left its window.
    ///
    /// A detach without a prior attach is ignored.
    pub fn on_detached(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed || !inner.attach.is_attached() {
            return;
        }
        inner.attach = AttachState::Detached;
        inner.emit_surface(SurfaceEventKind::Detached);
        if inner.strategy == CompositionStrategy::DisposeOnDetachedFromWindow {
            inner.teardown();
        }
    }

    /// Delivers a frame callback.
    ///
    /// Returns `None` unless the surface is attached, renderable and
    /// composed.
    pub fn on_frame(&self, tick: &FrameTick) -> Option<FrameOutput> {
        let mut inner = self.inner.borrow_mut();
        inner.resync();
        if !inner.can_render() {
            return None;
        }
        let id = inner.id;
        let out = inner.effect_mut()?.frame(tick);
        let e = FrameEvent {
            surface: id,
            frame_index: out.frame_index,
            now: tick.now,
            angle_degrees: out.angle,
            scale: out.scale,
            updated_items: u32::try_from(out.updated.len()).unwrap_or(u32::MAX),
            damage_rects: u32::try_from(out.damage.rect_count()).unwrap_or(u32::MAX),
            full_damage: out.damage.is_full(),
        };
        inner.context.trace(|t| t.frame(&e));
        Some(out)
    }

    /// Delivers a tap at `point`, in surface pixels.
    ///
    /// Returns the new scale target if the tap toggled the press state.
    pub fn on_tap(&self, point: Point) -> Option<f64> {
        let mut inner = self.inner.borrow_mut();
        inner.resync();
        if !inner.can_render() {
            return None;
        }
        let id = inner.id;
        let effect = inner.effect_mut()?;
        let target = effect.tap(point)?;
        let pressed = effect.context().is_pressed();
        let e = TapEvent {
            surface: id,
            pressed,
            target_scale: target,
            timestamp: inner.context.now(),
        };
        inner.context.trace(|t| t.tap(&e));
        Some(target)
    }

    /// Applies the host layout pass.
    pub fn set_size(&self, width: f64, height: f64) {
        let mut inner = self.inner.borrow_mut();
        let size = Size::new(width.max(0.0), height.max(0.0));
        inner.size = size;
        if let Some(effect) = inner.effect_mut() {
            effect.resize(size);
        }
    }

    /// Runs `f` against the current render plan, if composed.
    pub fn with_render_plan<R>(&self, f: impl FnOnce(&RenderPlan) -> R) -> Option<R> {
        let inner = self.inner.borrow();
        let effect = inner.session.as_ref()?.effect.as_ref()?;
        Some(f(effect.plan()))
    }

    /// Returns `true` if the host should schedule a frame for this surface.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.resync();
        }
        let inner = self.inner.borrow();
        inner.can_render() && inner.is_composed()
    }

    /// Tears everything down: observer, effect and animation.
    ///
    /// Idempotent. A disposed surface ignores every further notification.
    pub fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return;
        }
        inner.teardown();
        let _ = inner.guard.destroy();
        inner.disposed = true;
        inner.emit_surface(SurfaceEventKind::Disposed);
    }

    /// Returns the surface id.
    #[must_use]
    pub fn id(&self) -> SurfaceId {
        self.inner.borrow().id
    }

    /// Returns whether the surface is in a window.
    #[must_use]
    pub fn attach_state(&self) -> AttachState {
        self.inner.borrow().attach
    }

    /// Returns the guard state.
    #[must_use]
    pub fn lifecycle_state(&self) -> LifecycleState {
        self.inner.borrow().guard.state()
    }

    /// Returns the composition strategy.
    #[must_use]
    pub fn strategy(&self) -> CompositionStrategy {
        self.inner.borrow().strategy
    }

    /// Returns `true` while this surface observes the host lifecycle.
    #[must_use]
    pub fn has_lifecycle_observer(&self) -> bool {
        self.inner
            .borrow()
            .session
            .as_ref()
            .is_some_and(|s| s.subscription.is_active())
    }

    /// Returns `true` while an effect exists.
    #[must_use]
    pub fn is_composed(&self) -> bool {
        self.inner.borrow().is_composed()
    }

    /// Returns `true` once disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }
}

impl Drop for GlassSurface {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for GlassSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("GlassSurface")
            .field("id", &inner.id)
            .field("strategy", &inner.strategy)
            .field("attach", &inner.attach)
            .field("guard", &inner.guard.state())
            .field("composed", &inner.is_composed())
            .field("disposed", &inner.disposed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choreographer::Choreographer;
    use crate::lifecycle::LifecycleRegistry;
    use frostglass_core::lifecycle::LifecycleEvent;
    use frostglass_core::time::{HostTime, Timebase};

    const VSYNC: u64 = 16_666_667;

    struct Host {
        lifecycle: LifecycleRegistry,
        context: ThemedContext,
        choreographer: Choreographer,
        clock: u64,
    }

    impl Host {
        fn new() -> Self {
            let lifecycle = LifecycleRegistry::new();
            let context = ThemedContext::new(lifecycle.clone()).with_density(1.0);
            Self {
                lifecycle,
                choreographer: context.choreographer(),
                context,
                clock: 1_000_000_000,
            }
        }

        fn surface(&self, strategy: CompositionStrategy) -> GlassSurface {
            let surface = GlassSurface::new(&self.context, strategy);
            surface.set_size(400.0, 800.0);
            surface
        }

        fn tick(&mut self) -> FrameTick {
            self.clock += VSYNC;
            self.choreographer.do_frame(self.clock)
        }
    }

    #[test]
    fn nothing_composes_before_started() {
        let mut host = Host::new();
        let _ = host.lifecycle.move_to(HostLifecycleState::Created);
        let surface = host.surface(CompositionStrategy::default());
        assert!(surface.has_lifecycle_observer(), "observer precedes content");
        surface.on_attached();
        assert!(!surface.is_composed());
        assert!(!surface.needs_frame());
        assert_eq!(surface.on_frame(&host.tick()), None);

        let _ = host.lifecycle.handle_event(LifecycleEvent::OnStart);
        assert!(surface.is_composed());
        assert!(surface.needs_frame());
    }

    #[test]
    fn mount_started_tap_tap_detach_scenario() {
        let mut host = Host::new();
        let surface = host.surface(CompositionStrategy::default());
        surface.on_attached();
        let _ = host.lifecycle.move_to(HostLifecycleState::Started);

        let first = surface.on_frame(&host.tick());
        let Some(first) = first else {
            panic!("started and attached surface must render");
        };
        assert_eq!(first.angle, 0.0);
        assert!(first.damage.is_full());

        assert_eq!(surface.on_tap(Point::new(200.0, 400.0)), Some(1.1));
        let out = surface.on_frame(&host.tick());
        assert!(out.is_some_and(|o| o.pressed && o.scale > 1.0));
        assert_eq!(surface.on_tap(Point::new(200.0, 400.0)), Some(1.0));

        surface.on_detached();
        assert_eq!(surface.on_frame(&host.tick()), None);
        assert!(!surface.is_composed());
        assert!(!surface.has_lifecycle_observer());
        assert_eq!(host.lifecycle.observer_count(), 0);
    }

    #[test]
    fn reattach_never_leaves_two_contexts() {
        let mut host = Host::new();
        let _ = host.lifecycle.move_to(HostLifecycleState::Resumed);
        let surface = host.surface(CompositionStrategy::default());
        surface.on_attached();
        let _ = surface.on_frame(&host.tick());
        let _ = surface.on_tap(Point::new(1.0, 1.0));

        surface.on_detached();
        surface.on_attached();
        assert_eq!(host.lifecycle.observer_count(), 1);
        assert!(surface.is_composed());

        let out = surface.on_frame(&host.tick());
        let Some(out) = out else {
            panic!("re-attached surface renders");
        };
        assert_eq!(out.angle, 0.0, "fresh context restarts the rotation");
        assert!(!out.pressed, "fresh context is unpressed");
    }

    #[test]
    fn out_of_order_attach_detach_are_no_ops() {
        let mut host = Host::new();
        let _ = host.lifecycle.move_to(HostLifecycleState::Resumed);
        let surface = host.surface(CompositionStrategy::default());

        surface.on_detached();
        assert_eq!(surface.attach_state(), AttachState::Detached);
        assert!(surface.has_lifecycle_observer());

        surface.on_attached();
        surface.on_attached();
        assert_eq!(host.lifecycle.observer_count(), 1);
        let _ = surface.on_frame(&host.tick());
        let out = surface.on_frame(&host.tick());
        assert!(out.is_some_and(|o| o.angle > 0.0), "double attach kept the context");

        surface.on_detached();
        surface.on_detached();
        assert_eq!(surface.attach_state(), AttachState::Detached);
    }

    #[test]
    fn losing_started_unmounts_but_keeps_observing() {
        let mut host = Host::new();
        let _ = host.lifecycle.move_to(HostLifecycleState::Resumed);
        let surface = host.surface(CompositionStrategy::default());
        surface.on_attached();
        assert!(surface.is_composed());

        let _ = host.lifecycle.move_to(HostLifecycleState::Created);
        assert!(!surface.is_composed());
        assert!(surface.has_lifecycle_observer());
        assert_eq!(surface.on_frame(&host.tick()), None);

        let _ = host.lifecycle.move_to(HostLifecycleState::Started);
        assert!(surface.is_composed());
    }

    #[test]
    fn host_destroy_stops_frames_and_releases_observer() {
        let mut host = Host::new();
        let _ = host.lifecycle.move_to(HostLifecycleState::Resumed);
        let surface = host.surface(CompositionStrategy::DisposeOnLifecycleDestroyed);
        surface.on_attached();
        assert!(surface.on_frame(&host.tick()).is_some());

        let _ = host.lifecycle.handle_event(LifecycleEvent::OnDestroy);
        assert_eq!(surface.lifecycle_state(), LifecycleState::Destroyed);
        assert_eq!(surface.on_frame(&host.tick()), None);
        assert_eq!(host.lifecycle.observer_count(), 0);

        surface.on_detached();
        surface.on_attached();
        assert!(!surface.is_composed(), "destroyed surfaces never recompose");
        assert!(!surface.has_lifecycle_observer());
    }

    #[test]
    fn lifecycle_destroyed_strategy_survives_detach() {
        let mut host = Host::new();
        let _ = host.lifecycle.move_to(HostLifecycleState::Resumed);
        let surface = host.surface(CompositionStrategy::DisposeOnLifecycleDestroyed);
        surface.on_attached();
        let _ = surface.on_frame(&host.tick());

        surface.on_detached();
        assert!(surface.is_composed());
        assert!(!surface.needs_frame(), "detached surfaces are not drawn");
        assert_eq!(surface.on_frame(&host.tick()), None);

        surface.on_attached();
        let out = surface.on_frame(&host.tick());
        assert!(out.is_some_and(|o| o.angle > 0.0), "context survived the detach");
    }

    #[test]
    fn dispose_is_idempotent_and_final() {
        let mut host = Host::new();
        let _ = host.lifecycle.move_to(HostLifecycleState::Resumed);
        let surface = host.surface(CompositionStrategy::default());
        surface.on_attached();
        surface.dispose();
        surface.dispose();
        assert!(surface.is_disposed());
        assert!(!surface.is_composed());
        assert_eq!(host.lifecycle.observer_count(), 0);
        assert_eq!(surface.on_frame(&host.tick()), None);
        assert_eq!(surface.on_tap(Point::new(1.0, 1.0)), None);

        surface.on_detached();
        surface.on_attached();
        assert!(!surface.is_composed());
    }

    #[test]
    fn dropping_surface_removes_observer() {
        let host = Host::new();
        let surface = host.surface(CompositionStrategy::default());
        assert_eq!(host.lifecycle.observer_count(), 1);
        drop(surface);
        assert_eq!(host.lifecycle.observer_count(), 0);
    }

    #[test]
    fn tap_outside_or_while_uncomposed_is_ignored() {
        let mut host = Host::new();
        let surface = host.surface(CompositionStrategy::default());
        surface.on_attached();
        assert_eq!(surface.on_tap(Point::new(10.0, 10.0)), None);

        let _ = host.lifecycle.move_to(HostLifecycleState::Started);
        assert_eq!(surface.on_tap(Point::new(-5.0, 10.0)), None);
        assert_eq!(surface.on_tap(Point::new(10.0, 10.0)), Some(1.1));
        let _ = surface.on_frame(&host.tick());
    }

    #[test]
    fn missing_density_renders_fixed_pixel_layout() {
        let mut host = Host::new();
        host.context = ThemedContext::new(host.lifecycle.clone());
        let _ = host.lifecycle.move_to(HostLifecycleState::Resumed);
        let surface = host.surface(CompositionStrategy::default());
        surface.on_attached();
        let out = surface.on_frame(&host.tick());
        assert!(out.is_some());
        let panel_width = surface.with_render_plan(|plan| plan.items[5].bounds().width());
        assert_eq!(panel_width, Some(340.0));
    }

    #[test]
    fn resize_relayouts_composed_effect() {
        let mut host = Host::new();
        let _ = host.lifecycle.move_to(HostLifecycleState::Resumed);
        let surface = host.surface(CompositionStrategy::default());
        surface.on_attached();
        let _ = surface.on_frame(&host.tick());
        surface.set_size(1000.0, 1000.0);
        let out = surface.on_frame(&host.tick());
        assert!(out.is_some_and(|o| o.damage.is_full()));
        let size = surface.with_render_plan(|plan| plan.size);
        assert_eq!(size, Some(Size::new(1000.0, 1000.0)));
    }

    #[test]
    fn surfaces_are_independent() {
        let mut host = Host::new();
        let _ = host.lifecycle.move_to(HostLifecycleState::Resumed);
        let a = host.surface(CompositionStrategy::default());
        let b = host.surface(CompositionStrategy::default());
        assert_ne!(a.id(), b.id());
        a.on_attached();
        b.on_attached();
        let _ = a.on_tap(Point::new(1.0, 1.0));
        let tick = host.tick();
        assert!(a.on_frame(&tick).is_some_and(|o| o.pressed));
        assert!(b.on_frame(&tick).is_some_and(|o| !o.pressed));

        drop(a);
        assert_eq!(host.lifecycle.observer_count(), 1);
        assert!(b.needs_frame());
    }

    #[test]
    fn host_destroyed_while_plan_is_borrowed_stops_frames() {
        let mut host = Host::new();
        let _ = host.lifecycle.move_to(HostLifecycleState::Resumed);
        let surface = host.surface(CompositionStrategy::DisposeOnLifecycleDestroyed);
        surface.on_attached();
        assert!(surface.on_frame(&host.tick()).is_some());

        let lifecycle = host.lifecycle.clone();
        let events = surface.with_render_plan(|_| lifecycle.move_to(HostLifecycleState::Destroyed));
        assert_eq!(
            events.and_then(|e| e.last().copied()),
            Some(LifecycleEvent::OnDestroy)
        );

        assert!(!surface.needs_frame());
        assert_eq!(surface.on_frame(&host.tick()), None);
        assert_eq!(surface.lifecycle_state(), LifecycleState::Destroyed);
        assert!(!surface.is_composed());
        assert_eq!(host.lifecycle.observer_count(), 0);
    }

    #[test]
    fn host_stopped_while_plan_is_borrowed_blocks_taps() {
        let mut host = Host::new();
        let _ = host.lifecycle.move_to(HostLifecycleState::Started);
        let surface = host.surface(CompositionStrategy::default());
        surface.on_attached();
        let _ = surface.on_frame(&host.tick());

        let lifecycle = host.lifecycle.clone();
        let _ = surface.with_render_plan(|_| lifecycle.move_to(HostLifecycleState::Created));
        assert_eq!(surface.on_tap(Point::new(200.0, 400.0)), None);
        assert!(!surface.is_composed());
        assert!(surface.has_lifecycle_observer());

        let _ = host.lifecycle.move_to(HostLifecycleState::Started);
        assert!(surface.is_composed());
        assert!(surface.on_frame(&host.tick()).is_some());
    }

    #[test]
    fn microsecond_timebase_keeps_animation_timing() {
        fn clock() -> HostTime {
            HostTime(0)
        }
        let lifecycle = LifecycleRegistry::new();
        let context = ThemedContext::new(lifecycle.clone())
            .with_density(1.0)
            .with_clock(clock, Timebase::new(1_000, 1));
        let mut choreographer = context.choreographer();
        let _ = lifecycle.move_to(HostLifecycleState::Resumed);
        let surface = GlassSurface::new(&context, CompositionStrategy::default());
        surface.set_size(400.0, 800.0);
        surface.on_attached();

        let start = 1_000_000_000;
        let first = surface.on_frame(&choreographer.do_frame(start));
        assert_eq!(first.map(|o| o.angle), Some(0.0));

        // One vsync after a press the spring has barely left rest.
        assert_eq!(surface.on_tap(Point::new(200.0, 400.0)), Some(1.1));
        let pressed = surface.on_frame(&choreographer.do_frame(start + VSYNC));
        let Some(pressed) = pressed else {
            panic!("composed surface renders");
        };
        assert!(pressed.scale > 1.0 && pressed.scale < 1.05, "got {}", pressed.scale);

        // Half of the 2.5 s rotation period.
        let half = surface.on_frame(&choreographer.do_frame(start + 1_250_000_000));
        let Some(half) = half else {
            panic!("composed surface renders");
        };
        assert!((half.angle - 180.0).abs() < 1e-9, "got {}", half.angle);
    }
}
