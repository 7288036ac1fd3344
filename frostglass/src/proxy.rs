// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cross-platform `GlassView` placeholder.
//!
//! Screens declare a [`GlassView`] with a [`ViewStyle`] and nothing else.
//! Mounting resolves it once per process: on Android it becomes the native
//! provider's [`GlassSurface`], elsewhere an inert [`FallbackView`] that
//! keeps the same style and never animates.

use std::sync::OnceLock;

use frostglass_backend_android::{
    GLASS_VIEW_NAME, GlassSurface, ThemedContext, ViewError, ViewManagerRegistry,
};
use frostglass_core::timing::FrameTick;
use frostglass_render::effect::FrameOutput;
use kurbo::{Point, Rect, Size, Vec2};

use crate::platform::Platform;
use crate::style::ViewStyle;

/// What a [`GlassView`] turns into when mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewBackend {
    /// The provider's native `"GlassView"`.
    NativeGlassView,
    /// A plain container with the same style.
    FallbackView,
}

/// Picks the backend for `platform`.
#[must_use]
pub const fn resolve_backend(platform: Platform) -> ViewBackend {
    if platform.has_native_glass() {
        ViewBackend::NativeGlassView
    } else {
        ViewBackend::FallbackView
    }
}

static VIEW_BACKEND: OnceLock<ViewBackend> = OnceLock::new();

/// Returns the backend for this process.
///
/// Resolved on first call from [`Platform::current`], then reused.
pub fn view_backend() -> ViewBackend {
    *VIEW_BACKEND.get_or_init(|| resolve_backend(Platform::current()))
}

/// Declarative glass placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlassView {
    /// Placement of the panel inside its parent.
    pub style: ViewStyle,
}

impl GlassView {
    /// Creates a placeholder with `style`.
    #[must_use]
    pub const fn new(style: ViewStyle) -> Self {
        Self { style }
    }

    /// Mounts on the process backend.
    pub fn mount(
        &self,
        registry: &ViewManagerRegistry,
        context: &ThemedContext,
    ) -> Result<MountedGlassView, ViewError> {
        self.mount_with(view_backend(), registry, context)
    }

    /// Mounts on an explicit backend.
    ///
    /// The native backend asks `registry` for [`GLASS_VIEW_NAME`]; failing
    /// that lookup is an error. The fallback never touches the registry.
    pub fn mount_with(
        &self,
        backend: ViewBackend,
        registry: &ViewManagerRegistry,
        context: &ThemedContext,
    ) -> Result<MountedGlassView, ViewError> {
        Ok(match backend {
            ViewBackend::NativeGlassView => MountedGlassView::Native {
                style: self.style,
                frame: Rect::ZERO,
                surface: registry.create_view(GLASS_VIEW_NAME, context)?,
            },
            ViewBackend::FallbackView => MountedGlassView::Fallback(FallbackView::new(self.style)),
        })
    }
}

/// Inert stand-in for platforms without the native effect.
///
/// Occupies its frame and draws nothing: no blur, no animation, no frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackView {
    style: ViewStyle,
    frame: Rect,
}

impl FallbackView {
    fn new(style: ViewStyle) -> Self {
        Self {
            style,
            frame: Rect::ZERO,
        }
    }

    /// Returns the style it was mounted with.
    #[must_use]
    pub fn style(&self) -> &ViewStyle {
        &self.style
    }

    /// Returns the frame from the last layout.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }
}

/// A mounted [`GlassView`].
#[derive(Debug)]
pub enum MountedGlassView {
    /// Backed by the native surface.
    Native {
        /// The placeholder's style.
        style: ViewStyle,
        /// Frame from the last layout, in parent coordinates.
        frame: Rect,
        /// The provider's surface.
        surface: GlassSurface,
    },
    /// Backed by an inert container.
    Fallback(FallbackView),
}

impl MountedGlassView {
    /// Returns which backend this view resolved to.
    #[must_use]
    pub fn backend(&self) -> ViewBackend {
        match self {
            Self::Native { .. } => ViewBackend::NativeGlassView,
            Self::Fallback(_) => ViewBackend::FallbackView,
        }
    }

    /// Returns the style, identical across backends.
    #[must_use]
    pub fn style(&self) -> &ViewStyle {
        match self {
            Self::Native { style, .. } => style,
            Self::Fallback(view) => view.style(),
        }
    }

    /// Returns the frame from the last layout.
    #[must_use]
    pub fn frame(&self) -> Rect {
        match self {
            Self::Native { frame, .. } => *frame,
            Self::Fallback(view) => view.frame,
        }
    }

    /// Returns the native surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&GlassSurface> {
        match self {
            Self::Native { surface, .. } => Some(surface),
            Self::Fallback(_) => None,
        }
    }

    /// Lays the view out inside a parent of `parent` size.
    pub fn layout(&mut self, parent: Size) -> Rect {
        match self {
            Self::Native {
                style,
                frame,
                surface,
            } => {
                *frame = style.frame_in(parent);
                surface.set_size(frame.width(), frame.height());
                *frame
            }
            Self::Fallback(view) => {
                view.frame = view.style.frame_in(parent);
                view.frame
            }
        }
    }

    /// Forwards an attach notification.
    pub fn on_attached(&self) {
        if let Self::Native { surface, .. } = self {
            surface.on_attached();
        }
    }

    /// Forwards a detach notification.
    pub fn on_detached(&self) {
        if let Self::Native { surface, .. } = self {
            surface.on_detached();
        }
    }

    /// Returns `true` if the view wants the next frame callback.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.surface().is_some_and(GlassSurface::needs_frame)
    }

    /// Delivers a frame callback. The fallback never produces frames.
    pub fn on_frame(&self, tick: &FrameTick) -> Option<FrameOutput> {
        self.surface()?.on_frame(tick)
    }

    /// Delivers a tap at `point`, in parent coordinates.
    ///
    /// Returns the new scale target if the panel toggled. Taps outside the
    /// frame are dropped before reaching the surface.
    pub fn on_tap(&self, point: Point) -> Option<f64> {
        let Self::Native { frame, surface, .. } = self else {
            return None;
        };
        if !frame.contains(point) {
            return None;
        }
        surface.on_tap(point - Vec2::new(frame.x0, frame.y0))
    }
}
