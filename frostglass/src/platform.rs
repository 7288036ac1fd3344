// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target platform detection.

/// The platform family the crate was compiled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Android: the native glass view is available.
    Android,
    /// iOS.
    Ios,
    /// Anything else (desktop, web, tests).
    Other,
}

impl Platform {
    /// Returns the platform of the compile target.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_os = "ios") {
            Self::Ios
        } else {
            Self::Other
        }
    }

    /// Returns `true` if a native glass view provider exists here.
    #[must_use]
    pub const fn has_native_glass(self) -> bool {
        matches!(self, Self::Android)
    }
}
