// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render plan: an ordered sequence of draw items for one surface.

use core::ops::Range;

use frostglass_core::density::{Density, Dp};
use frostglass_core::surface::SurfaceId;
use kurbo::{Affine, Circle, Point, Rect, RoundedRect, Shape, Size};

use crate::Color;

/// Paint used to fill or stroke a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    /// A single color.
    Solid(Color),
    /// Colors spread evenly along the line from `start` to `end`, clamped
    /// beyond the endpoints.
    LinearGradient {
        /// Where the first stop sits.
        start: Point,
        /// Where the last stop sits.
        end: Point,
        /// Evenly spaced color stops.
        stops: &'static [Color],
    },
}

/// A frosted-glass material applied over already-drawn content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Gaussian blur radius, in pixels once resolved.
    pub blur_radius: f64,
    /// Color laid over the blurred backdrop.
    pub tint: Color,
    /// Opacity of the tint layer.
    pub tint_alpha: f64,
    /// Strength of the grain overlay in `[0, 1]`.
    pub noise: f64,
}

impl Material {
    /// The thinnest frost: heavy blur, light tint.
    ///
    /// The blur radius is in dp; call [`resolve`](Self::resolve) before
    /// placing it in a plan.
    #[must_use]
    pub const fn ultra_thin(tint: Color) -> Self {
        Self {
            blur_radius: 24.0,
            tint,
            tint_alpha: 0.35,
            noise: 0.15,
        }
    }

    /// Converts the dp blur radius to pixels.
    #[must_use]
    pub fn resolve(self, density: Density) -> Self {
        Self {
            blur_radius: density.dp_to_px(Dp(self.blur_radius)),
            ..self
        }
    }
}

/// A single draw command in the render plan.
///
/// Items are stored back-to-front. Transforms map item geometry into
/// surface pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderItem {
    /// Fill an axis-aligned rectangle.
    Fill {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Fill a circle.
    Circle {
        /// The circle.
        circle: Circle,
        /// Fill color.
        color: Color,
    },
    /// Blur what is already drawn beneath `region` and lay a material over it.
    BackdropBlur {
        /// Area receiving the frost, before `transform`.
        region: RoundedRect,
        /// Maps `region` into surface pixels.
        transform: Affine,
        /// Blur and tint parameters.
        material: Material,
        /// Indices of the plan items this pass may sample.
        samples: Range<usize>,
    },
    /// Stroke a rounded rectangle, clipped to another rounded rectangle.
    Stroke {
        /// Stroke centerline, before `transform`.
        shape: RoundedRect,
        /// Clip applied to the stroke, before `transform`.
        clip: RoundedRect,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke paint, in the same space as `shape`.
        brush: Brush,
        /// Maps `shape`, `clip` and `brush` into surface pixels.
        transform: Affine,
    },
    /// Draw a single line of text centered in `bounds`.
    Text {
        /// The string to draw.
        text: &'static str,
        /// Text color.
        color: Color,
        /// Layout box, before `transform`.
        bounds: Rect,
        /// Maps `bounds` into surface pixels.
        transform: Affine,
    },
}

impl RenderItem {
    /// Returns the surface-space bounding box this item can touch.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Fill { rect, .. } => *rect,
            Self::Circle { circle, .. } => circle.bounding_box(),
            Self::BackdropBlur {
                region, transform, ..
            } => transform.transform_rect_bbox(region.rect()),
            Self::Stroke {
                shape,
                clip,
                width,
                transform,
                ..
            } => {
                let half = width / 2.0;
                let stroked = shape.rect().inflate(half, half);
                transform.transform_rect_bbox(stroked.intersect(clip.rect()))
            }
            Self::Text {
                bounds, transform, ..
            } => transform.transform_rect_bbox(*bounds),
        }
    }

    /// Returns `true` for [`RenderItem::BackdropBlur`].
    #[must_use]
    pub fn is_blur(&self) -> bool {
        matches!(self, Self::BackdropBlur { .. })
    }
}

/// An ordered list of draw commands for a single surface.
///
/// Painters translate this into native canvas operations.
#[derive(Clone, Debug, Default)]
pub struct RenderPlan {
    /// The surface this plan draws.
    pub surface: SurfaceId,
    /// Surface size in pixels.
    pub size: Size,
    /// Draw items in back-to-front order.
    pub items: Vec<RenderItem>,
}

impl RenderPlan {
    /// Creates an empty render plan for the given surface.
    #[must_use]
    pub fn new(surface: SurfaceId, size: Size) -> Self {
        Self {
            surface,
            size,
            items: Vec::new(),
        }
    }

    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the surface bounds as a rectangle at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size)
    }

    /// Checks that every blur pass samples only items drawn before it.
    ///
    /// Content drawn after a blur (border, label) must stay sharp, so a blur
    /// whose sample range reaches its own index or beyond is malformed.
    #[must_use]
    pub fn blur_samples_only_prior_items(&self) -> bool {
        self.items.iter().enumerate().all(|(idx, item)| match item {
            RenderItem::BackdropBlur { samples, .. } => {
                samples.start <= samples.end && samples.end <= idx
            }
            _ => true,
        })
    }
}
