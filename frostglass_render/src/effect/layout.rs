// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel geometry of the glass effect for one surface size.

use frostglass_core::density::{Density, Dp, LayoutMode};
use kurbo::{Affine, Circle, Point, Rect, RoundedRect, Size, Vec2};

use super::context::CIRCLE_ANCHORS;

/// Edge of the reference square that sizes the circles and the gradient.
pub const REFERENCE_SIZE: Dp = Dp(200.0);

/// Background circle radius: half the reference size.
pub const CIRCLE_RADIUS: Dp = Dp(100.0);

/// Width and height of the frosted panel.
pub const PANEL_SIZE: (Dp, Dp) = (Dp(340.0), Dp(500.0));

/// Corner radius of the frosted panel.
pub const PANEL_CORNER_RADIUS: Dp = Dp(50.0);

/// Border stroke width.
pub const BORDER_WIDTH: Dp = Dp(4.0);

/// Outer corner radius of the border.
pub const BORDER_CORNER_RADIUS: Dp = Dp(16.0);

/// Inset of the label box from the panel edges.
pub const LABEL_PADDING: Dp = Dp(16.0);

/// The label drawn on the panel.
pub const LABEL_TEXT: &str = "Filled";

/// Resolved pixel geometry.
///
/// Circles follow the surface size. The panel has a fixed dp size and is
/// centered, so it may overflow a small surface.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectLayout {
    /// Surface size in pixels.
    pub size: Size,
    /// Density used for dp conversion.
    pub density: Density,
    /// Whether `density` came from the host or the fixed-pixel fallback.
    pub mode: LayoutMode,
    /// Full-bleed backdrop.
    pub backdrop: Rect,
    /// Background circles, in palette order.
    pub circles: [Circle; 4],
    /// The frosted region, before press scaling.
    pub panel: RoundedRect,
    /// Center of the panel; the pivot for scale and rotation.
    pub panel_center: Point,
    /// Border stroke centerline, inside the panel.
    pub border: RoundedRect,
    /// Border stroke width in pixels.
    pub border_width: f64,
    /// Label layout box.
    pub label_bounds: Rect,
    /// Half of the reference-size diagonal; the unrotated gradient runs
    /// from `panel_center - gradient_extent` to `panel_center + gradient_extent`.
    pub gradient_extent: Vec2,
}

impl EffectLayout {
    /// Lays out the effect for a surface of `size` pixels.
    ///
    /// An absent density is laid out at one pixel per dp.
    #[must_use]
    pub fn compute(size: Size, density: Option<Density>) -> Self {
        let (density, mode) = Density::or_fixed_pixel(density);
        let px = |dp: Dp| density.dp_to_px(dp);

        let backdrop = Rect::from_origin_size(Point::ORIGIN, size);
        let radius = px(CIRCLE_RADIUS);
        let circles = CIRCLE_ANCHORS.map(|anchor| {
            Circle::new(
                Point::new(size.width * anchor.x, size.height * anchor.y),
                radius,
            )
        });

        let panel_center = backdrop.center();
        let panel_rect =
            Rect::from_center_size(panel_center, Size::new(px(PANEL_SIZE.0), px(PANEL_SIZE.1)));
        let panel = RoundedRect::from_rect(panel_rect, px(PANEL_CORNER_RADIUS));

        // The stroke sits entirely inside the panel, so its centerline is
        // inset by half the width and its radius shrinks to match.
        let border_width = px(BORDER_WIDTH);
        let half = border_width / 2.0;
        let border_rect = Rect::new(
            panel_rect.x0 + half,
            panel_rect.y0 + half,
            panel_rect.x1 - half,
            panel_rect.y1 - half,
        );
        let border = RoundedRect::from_rect(
            border_rect,
            (px(BORDER_CORNER_RADIUS) - half).max(0.0),
        );

        let pad = px(LABEL_PADDING);
        let label_bounds = Rect::new(
            panel_rect.x0 + pad,
            panel_rect.y0 + pad,
            panel_rect.x1 - pad,
            panel_rect.y1 - pad,
        );

        let half_ref = px(REFERENCE_SIZE) / 2.0;

        Self {
            size,
            density,
            mode,
            backdrop,
            circles,
            panel,
            panel_center,
            border,
            border_width,
            label_bounds,
            gradient_extent: Vec2::new(half_ref, half_ref),
        }
    }

    /// Transform applying the press scale about the panel center.
    #[must_use]
    pub fn scale_transform(&self, scale: f64) -> Affine {
        Affine::scale_about(scale, self.panel_center)
    }

    /// Gradient endpoints for the given angle, in unscaled panel space.
    #[must_use]
    pub fn gradient_line(&self, angle_degrees: f64) -> (Point, Point) {
        let rotate = Affine::rotate_about(angle_degrees.to_radians(), self.panel_center);
        (
            rotate * (self.panel_center - self.gradient_extent),
            rotate * (self.panel_center + self.gradient_extent),
        )
    }

    /// Returns `true` if `point` lies on the surface.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.backdrop.contains(point)
    }
}
