// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle gating, animation timing, and tracing for native glass panels.
//!
//! `frostglass_core` holds the platform-independent pieces of the glass-panel
//! view bridge: the types a host surface needs to decide *when* the glass
//! effect may render, and the animation state that drives it once it does.
//!
//! # Architecture
//!
//! A mounted panel is driven entirely by host notifications:
//!
//! ```text
//!   host lifecycle ──► LifecycleGuard::observe() ──► GuardTransition
//!                                                        │
//!          ┌─────────────────────────────────────────────┘
//!          ▼
//!   mount / unmount effect ◄── attach / detach
//!          │
//!          ▼
//!   FrameTick ──► InfiniteRotation::sample()  ──► angle
//!             └─► SpringAnimation::advance()  ──► press scale
//! ```
//!
//! **[`lifecycle`]**: Host lifecycle states and events, and the three-state
//! [`LifecycleGuard`](lifecycle::LifecycleGuard) that gates composition.
//!
//! **[`animation`]**: Time-driven animations: a restartable linear
//! rotation and an analytically solved damped spring.
//!
//! **[`density`]**: Density-independent units and the fixed-pixel
//! fallback used when the host reports no display metrics.
//!
//! **[`dirty`]**: Dirty-tracking channels used by the effect renderer to
//! recompute only the attributes that changed on a tick.
//!
//! **[`timing`]** / **[`time`]**: Frame ticks and monotonic host time.
//!
//! **[`surface`]**: Surface identity shared by backends and diagnostics.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! surface and frame instrumentation, with a zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies and
//!   uses the standard library's float math instead of `libm`.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod animation;
pub mod density;
pub mod dirty;
pub mod lifecycle;
pub mod surface;
pub mod time;
pub mod timing;
pub mod trace;
