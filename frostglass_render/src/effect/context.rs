// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation state owned by one mounted effect.

use frostglass_core::animation::{InfiniteRotation, RotationSpec, SpringAnimation, SpringSpec};
use frostglass_core::time::{HostTime, Timebase};
use frostglass_core::timing::FrameTick;
use kurbo::Point;

use crate::Color;

/// Full-bleed backdrop color.
pub const BACKDROP_COLOR: Color = Color(0xFF03_0521);

/// Accent colors, in drawing order. Also the border gradient stops.
pub const PALETTE: [Color; 4] = [
    Color(0xFF77_90FF),
    Color(0xFFFF_787A),
    Color(0xFF1A_CD9A),
    Color(0xFFFF_8FC0),
];

/// Circle centers relative to the surface size, matched to [`PALETTE`].
pub const CIRCLE_ANCHORS: [Point; 4] = [
    Point::new(0.25, 0.25),
    Point::new(0.75, 0.25),
    Point::new(0.25, 0.75),
    Point::new(0.75, 0.75),
];

/// Panel scale while pressed.
pub const PRESSED_SCALE: f64 = 1.1;

/// Panel scale at rest.
pub const RELEASED_SCALE: f64 = 1.0;

/// Animation state for one mounted effect.
///
/// Created when the surface becomes renderable and dropped when it stops
/// being renderable, so a remount always starts over at 0° and unpressed.
#[derive(Clone, Debug)]
pub struct EffectRenderContext {
    timebase: Timebase,
    rotation: InfiniteRotation,
    scale: SpringAnimation,
    pressed: bool,
    last_tick: Option<HostTime>,
}

impl EffectRenderContext {
    /// Creates a fresh, unpressed context.
    #[must_use]
    pub fn new(timebase: Timebase) -> Self {
        Self {
            timebase,
            rotation: InfiniteRotation::new(RotationSpec::GLASS_BORDER, timebase),
            scale: SpringAnimation::new(RELEASED_SCALE, SpringSpec::PRESS_SCALE),
            pressed: false,
            last_tick: None,
        }
    }

    /// Flips the press state and returns the new scale target.
    pub fn toggle_pressed(&mut self) -> f64 {
        self.pressed = !self.pressed;
        let target = if self.pressed {
            PRESSED_SCALE
        } else {
            RELEASED_SCALE
        };
        self.scale.animate_to(target);
        target
    }

    /// Advances both animations to the tick's time.
    ///
    /// Returns `true` if the scale moved.
    pub fn advance(&mut self, tick: &FrameTick) -> bool {
        let _ = self.rotation.sample(tick.now);
        let dt = match self.last_tick {
            Some(prev) => tick.elapsed_since(prev).as_secs_f64(self.timebase),
            None => 0.0,
        };
        self.last_tick = Some(self.last_tick.map_or(tick.now, |prev| prev.max(tick.now)));
        let before = self.scale.value();
        self.scale.advance(dt) != before
    }

    /// Returns `true` while pressed.
    #[inline]
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns the border gradient angle in degrees.
    #[inline]
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.rotation.angle()
    }

    /// Returns the current panel scale.
    #[inline]
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    /// Returns the scale the spring is heading to.
    #[inline]
    #[must_use]
    pub fn scale_target(&self) -> f64 {
        self.scale.target()
    }

    /// Returns `true` once the press spring has come to rest.
    #[inline]
    #[must_use]
    pub fn is_scale_settled(&self) -> bool {
        self.scale.is_settled()
    }
}
