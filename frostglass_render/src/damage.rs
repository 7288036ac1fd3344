// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial damage tracking for partial re-rendering.

use kurbo::Rect;

/// A region of the surface that needs re-rendering.
///
/// Painters can use this to redraw only the areas that changed since the
/// last frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DamageRegion {
    /// The entire surface needs redrawing.
    #[default]
    Full,
    /// A list of axis-aligned rectangles in surface pixels.
    Rects(Vec<Rect>),
    /// Nothing changed; the previous frame can be reused.
    None,
}

impl DamageRegion {
    /// Returns `true` if no region needs redrawing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Rects(rects) => rects.is_empty(),
            Self::Full => false,
        }
    }

    /// Returns `true` for [`DamageRegion::Full`].
    #[must_use]
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }

    /// Returns the number of damage rectangles, zero for full or no damage.
    #[must_use]
    pub fn rect_count(&self) -> usize {
        match self {
            Self::Rects(rects) => rects.len(),
            Self::Full | Self::None => 0,
        }
    }

    /// Adds one rectangle. Zero-area rectangles are skipped.
    pub fn add_rect(&mut self, rect: Rect) {
        if rect.area() <= 0.0 {
            return;
        }
        match self {
            Self::Full => {}
            Self::Rects(rects) => rects.push(rect),
            Self::None => *self = Self::Rects(vec![rect]),
        }
    }

    /// Returns the smallest rectangle covering all damage, if bounded.
    ///
    /// Full damage returns `bounds`.
    #[must_use]
    pub fn bounding_box(&self, bounds: Rect) -> Option<Rect> {
        match self {
            Self::Full => Some(bounds),
            Self::None => None,
            Self::Rects(rects) => rects.iter().copied().reduce(|a, b| a.union(b)),
        }
    }
}
