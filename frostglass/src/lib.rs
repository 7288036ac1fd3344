// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-platform glass panel.
//!
//! Screens place a [`GlassView`] behind their content. On Android it mounts
//! the native provider's animated glass surface; on every other platform it
//! resolves, once per process, to an inert [`FallbackView`] with the same
//! style.
//!
//! ```
//! use frostglass::{Screen, ScreenWrapper, ViewBackend};
//! use frostglass_backend_android::{LifecycleRegistry, ThemedContext, ViewManagerRegistry};
//! use kurbo::Size;
//!
//! let context = ThemedContext::new(LifecycleRegistry::new());
//! let registry = ViewManagerRegistry::with_glass_package();
//! let mut home =
//!     ScreenWrapper::mount_with(Screen::Home, ViewBackend::FallbackView, &registry, &context)
//!         .unwrap();
//! home.layout(Size::new(360.0, 640.0));
//! assert_eq!(home.glass().backend(), ViewBackend::FallbackView);
//! assert_eq!(Screen::Home.button_label(), Some("Go to Second Screen"));
//! ```
//!
//! # Crate features
//!
//! - `trace` (disabled by default): forwards surface diagnostics to the
//!   context's trace sink.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod platform;
mod proxy;
mod screen;
mod style;

pub use platform::Platform;
pub use proxy::{
    FallbackView, GlassView, MountedGlassView, ViewBackend, resolve_backend, view_backend,
};
pub use screen::{
    SCREEN_BACKGROUND, Screen, ScreenWrapper, TITLE_COLOR, TITLE_FONT_SIZE, TITLE_SPACING,
};
pub use style::{Position, ViewStyle};
