// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Density-independent units.
//!
//! Glass geometry is specified in density-independent pixels ([`Dp`]) and
//! converted to device pixels with the host's [`Density`]. A host that
//! reports no usable density (missing, zero, negative, or non-finite) gets
//! the [fixed-pixel](LayoutMode::FixedPixel) fallback of one pixel per dp
//! rather than an error.

/// A length in density-independent pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Converts to device pixels at the given density.
    #[inline]
    #[must_use]
    pub fn to_px(self, density: Density) -> f64 {
        density.dp_to_px(self)
    }
}

/// Device pixels per dp.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Density {
    scale: f64,
}

impl Density {
    /// One device pixel per dp.
    pub const FIXED_PIXEL: Self = Self { scale: 1.0 };

    /// Validates a host-reported scale.
    ///
    /// Returns `None` if `scale` is not finite or not positive.
    #[must_use]
    pub fn new(scale: f64) -> Option<Self> {
        (scale.is_finite() && scale > 0.0).then_some(Self { scale })
    }

    /// Returns the scale factor.
    #[inline]
    #[must_use]
    pub const fn scale(self) -> f64 {
        self.scale
    }

    /// Converts a dp length to device pixels.
    #[inline]
    #[must_use]
    pub fn dp_to_px(self, dp: Dp) -> f64 {
        dp.0 * self.scale
    }

    /// Converts device pixels back to dp.
    #[inline]
    #[must_use]
    pub fn px_to_dp(self, px: f64) -> Dp {
        Dp(px / self.scale)
    }

    /// Resolves an optional host density, falling back to fixed pixels.
    #[must_use]
    pub fn or_fixed_pixel(density: Option<Self>) -> (Self, LayoutMode) {
        match density {
            Some(d) => (d, LayoutMode::Scaled),
            None => (Self::FIXED_PIXEL, LayoutMode::FixedPixel),
        }
    }
}

/// How dp geometry was mapped to pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// The host reported a usable density.
    Scaled,
    /// No usable density; one pixel per dp.
    #[default]
    FixedPixel,
}
