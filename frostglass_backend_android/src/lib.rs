// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Android host bridge for frostglass.
//!
//! This crate models the Android side of the glass-panel view bridge:
//!
//! - [`ViewManagerRegistry`] / [`GlassViewManager`]: the named provider the
//!   cross-platform layer asks for `"GlassView"`
//! - [`GlassSurface`]: one host view per request, gating a
//!   [`GlassEffect`](frostglass_render::effect::GlassEffect) on attach state
//!   and the host lifecycle
//! - [`LifecycleRegistry`]: the host lifecycle owner, with RAII
//!   [`LifecycleSubscription`]s
//! - [`Choreographer`]: vsync callbacks as
//!   [`FrameTick`](frostglass_core::timing::FrameTick)s
//! - [`time`]: the monotonic host clock
//!
//! Everything here is single-threaded and runs on the host UI thread.
//!
//! # Example
//!
//! ```
//! use frostglass_backend_android::{
//!     GLASS_VIEW_NAME, LifecycleRegistry, ThemedContext, ViewManagerRegistry,
//! };
//! use frostglass_core::lifecycle::HostLifecycleState;
//!
//! let lifecycle = LifecycleRegistry::new();
//! let context = ThemedContext::new(lifecycle.clone()).with_density(2.0);
//! let package = ViewManagerRegistry::with_glass_package();
//!
//! let surface = package.create_view(GLASS_VIEW_NAME, &context).unwrap();
//! surface.set_size(720.0, 1280.0);
//! surface.on_attached();
//! let _ = lifecycle.move_to(HostLifecycleState::Resumed);
//!
//! let mut choreographer = context.choreographer();
//! let frame = surface.on_frame(&choreographer.do_frame(16_666_667)).unwrap();
//! assert_eq!(frame.angle, 0.0);
//! ```
//!
//! # Crate features
//!
//! - `trace` (disabled by default): forwards surface events to the
//!   context's trace sink.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod choreographer;
mod context;
mod lifecycle;
mod manager;
mod surface;
pub mod time;

pub use choreographer::Choreographer;
pub use context::{SharedTraceSink, ThemedContext};
pub use lifecycle::{LifecycleRegistry, LifecycleSubscription, ObserverId};
pub use manager::{GLASS_VIEW_NAME, GlassViewManager, ViewError, ViewManager, ViewManagerRegistry};
pub use surface::{CompositionStrategy, GlassSurface};
