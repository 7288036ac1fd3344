// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed ARGB colors.

use core::fmt;

/// A non-premultiplied color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0x0000_0000);

    /// Returns the alpha channel.
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Returns the red channel.
    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Returns the green channel.
    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Returns the blue channel.
    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    /// Returns this color with its alpha replaced by `alpha` in `[0, 1]`.
    ///
    /// Out-of-range values are clamped.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "clamped to [0, 255] before the cast"
    )]
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u32;
        Self((a << 24) | (self.0 & 0x00FF_FFFF))
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
