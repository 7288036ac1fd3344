// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host surface identification.
//!
//! [`SurfaceId`] is a lightweight handle identifying one mounted glass panel.
//! Backends assign these; core treats them as opaque.

use core::fmt;

/// Identifies one host surface (one mounted glass panel).
///
/// Backends assign surface IDs so that diagnostics from several panels can
/// be told apart. Core code passes them through without interpreting the
/// value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SurfaceId(pub u32);

impl fmt::Debug for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SurfaceId({})", self.0)
    }
}

/// Whether a host surface is currently part of a window's view hierarchy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttachState {
    /// Not in a window; never drawn.
    #[default]
    Detached,
    /// In a window; may be drawn once the lifecycle permits.
    Attached,
}

impl AttachState {
    /// Returns `true` for [`AttachState::Attached`].
    #[inline]
    #[must_use]
    pub const fn is_attached(self) -> bool {
        matches!(self, Self::Attached)
    }
}
