// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positional and sizing style for placeholder views.

use kurbo::{Rect, Size};

/// How a view is placed relative to its parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    /// In normal flow. Insets offset the view from where flow put it.
    #[default]
    Relative,
    /// Out of flow, placed by insets against the parent's edges.
    Absolute,
}

/// Positional and sizing style, in layout units.
///
/// Only the subset the glass placeholder accepts: no flex, no margins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewStyle {
    /// Placement mode.
    pub position: Position,
    /// Inset from the parent's left edge.
    pub left: Option<f64>,
    /// Inset from the parent's top edge.
    pub top: Option<f64>,
    /// Inset from the parent's right edge.
    pub right: Option<f64>,
    /// Inset from the parent's bottom edge.
    pub bottom: Option<f64>,
    /// Explicit width.
    pub width: Option<f64>,
    /// Explicit height.
    pub height: Option<f64>,
}

impl ViewStyle {
    /// Absolute placement covering the whole parent.
    #[must_use]
    pub const fn absolute_fill() -> Self {
        Self {
            position: Position::Absolute,
            left: Some(0.0),
            top: Some(0.0),
            right: Some(0.0),
            bottom: Some(0.0),
            width: None,
            height: None,
        }
    }

    /// Resolves the view's frame inside a parent of `parent` size.
    ///
    /// Absolute views are placed by their insets; an explicit size wins over
    /// the far inset. Relative views sit at the origin, offset by `left` /
    /// `top`, and fill the parent on any axis without an explicit size.
    /// Negative extents clamp to zero.
    #[must_use]
    pub fn frame_in(&self, parent: Size) -> Rect {
        let (x0, x1) = self.resolve_axis(parent.width, self.left, self.right, self.width);
        let (y0, y1) = self.resolve_axis(parent.height, self.top, self.bottom, self.height);
        Rect::new(x0, y0, x1.max(x0), y1.max(y0))
    }

    fn resolve_axis(
        &self,
        extent: f64,
        start: Option<f64>,
        end: Option<f64>,
        length: Option<f64>,
    ) -> (f64, f64) {
        match self.position {
            Position::Absolute => match (start, end, length) {
                (Some(s), _, Some(len)) => (s, s + len),
                (None, Some(e), Some(len)) => (extent - e - len, extent - e),
                (None, None, Some(len)) => (0.0, len),
                (s, e, None) => (s.unwrap_or(0.0), extent - e.unwrap_or(0.0)),
            },
            Position::Relative => {
                let offset = start.unwrap_or(0.0) - end.unwrap_or(0.0);
                let len = length.unwrap_or(extent);
                (offset, offset + len)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARENT: Size = Size::new(400.0, 800.0);

    #[test]
    fn absolute_fill_covers_parent() {
        let frame = ViewStyle::absolute_fill().frame_in(PARENT);
        assert_eq!(frame, Rect::new(0.0, 0.0, 400.0, 800.0));
    }

    #[test]
    fn default_is_relative_fill() {
        let style = ViewStyle::default();
        assert_eq!(style.position, Position::Relative);
        assert_eq!(style.frame_in(PARENT), Rect::new(0.0, 0.0, 400.0, 800.0));
    }

    #[test]
    fn explicit_size_wins_over_far_inset() {
        let style = ViewStyle {
            position: Position::Absolute,
            left: Some(10.0),
            right: Some(10.0),
            width: Some(100.0),
            bottom: Some(20.0),
            height: Some(50.0),
            ..ViewStyle::default()
        };
        assert_eq!(style.frame_in(PARENT), Rect::new(10.0, 730.0, 110.0, 780.0));
    }

    #[test]
    fn oversized_insets_clamp_to_empty() {
        let style = ViewStyle {
            left: Some(300.0),
            right: Some(300.0),
            ..ViewStyle::absolute_fill()
        };
        let frame = style.frame_in(PARENT);
        assert_eq!(frame.width(), 0.0, "insets larger than the parent collapse");
        assert_eq!(frame.height(), 800.0);
    }

    #[test]
    fn relative_offsets_shift_without_resizing() {
        let style = ViewStyle {
            left: Some(5.0),
            top: Some(7.0),
            height: Some(40.0),
            ..ViewStyle::default()
        };
        assert_eq!(style.frame_in(PARENT), Rect::new(5.0, 7.0, 405.0, 47.0));
    }
}
