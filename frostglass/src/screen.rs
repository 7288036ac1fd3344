// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screens that sit on top of the glass panel.
//!
//! Every screen is wrapped the same way: a dark container, a full-bleed
//! [`GlassView`] behind everything, then the screen's own content centered
//! on top. Navigation between screens is the host's business.

use frostglass_backend_android::{ThemedContext, ViewError, ViewManagerRegistry};
use frostglass_render::Color;
use frostglass_render::effect::BACKDROP_COLOR;
use kurbo::Size;

use crate::proxy::{GlassView, MountedGlassView, ViewBackend, view_backend};
use crate::style::{Position, ViewStyle};

/// Container background behind the glass.
pub const SCREEN_BACKGROUND: Color = BACKDROP_COLOR;

/// Title text size, in layout units.
pub const TITLE_FONT_SIZE: f64 = 24.0;

/// Title text color.
pub const TITLE_COLOR: Color = Color::WHITE;

/// Space between the title and whatever follows it.
pub const TITLE_SPACING: f64 = 20.0;

/// The app's screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The initial screen.
    #[default]
    Home,
    /// Reached from [`Screen::Home`].
    Second,
}

impl Screen {
    /// Route name the host navigator uses.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Second => "Second",
        }
    }

    /// Centered title text.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "HomeScreen",
            Self::Second => "SecondScreen",
        }
    }

    /// Label of the navigation button, if the screen has one.
    #[must_use]
    pub const fn button_label(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("Go to Second Screen"),
            Self::Second => None,
        }
    }

    /// Where the navigation button leads.
    #[must_use]
    pub const fn button_target(self) -> Option<Self> {
        match self {
            Self::Home => Some(Self::Second),
            Self::Second => None,
        }
    }
}

/// A screen mounted over the glass panel.
#[derive(Debug)]
pub struct ScreenWrapper {
    screen: Screen,
    style: ViewStyle,
    glass: MountedGlassView,
}

impl ScreenWrapper {
    /// Mounts `screen` on the process backend.
    pub fn mount(
        screen: Screen,
        registry: &ViewManagerRegistry,
        context: &ThemedContext,
    ) -> Result<Self, ViewError> {
        Self::mount_with(screen, view_backend(), registry, context)
    }

    /// Mounts `screen` on an explicit backend.
    pub fn mount_with(
        screen: Screen,
        backend: ViewBackend,
        registry: &ViewManagerRegistry,
        context: &ThemedContext,
    ) -> Result<Self, ViewError> {
        let glass =
            GlassView::new(ViewStyle::absolute_fill()).mount_with(backend, registry, context)?;
        Ok(Self {
            screen,
            style: ViewStyle {
                position: Position::Relative,
                ..ViewStyle::default()
            },
            glass,
        })
    }

    /// Returns the wrapped screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the container background.
    #[must_use]
    pub fn background(&self) -> Color {
        SCREEN_BACKGROUND
    }

    /// Returns the glass layer.
    #[must_use]
    pub fn glass(&self) -> &MountedGlassView {
        &self.glass
    }

    /// Lays out the container to fill `viewport` and the glass to fill the
    /// container.
    pub fn layout(&mut self, viewport: Size) {
        let container = self.style.frame_in(viewport);
        let _ = self.glass.layout(container.size());
    }

    /// Forwards an attach notification to the glass layer.
    pub fn on_attached(&self) {
        self.glass.on_attached();
    }

    /// Forwards a detach notification to the glass layer.
    pub fn on_detached(&self) {
        self.glass.on_detached();
    }
}
