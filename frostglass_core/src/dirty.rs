// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The effect renderer keeps one render-plan slot per draw item and uses
//! multi-channel dirty tracking (via [`understory_dirty`]) to recompute only
//! the slots whose inputs changed on a tick. Each channel represents an
//! independent cause of change.
//!
//! # Propagation
//!
//! - [`LAYOUT`] is marked on the surface node when the surface is resized
//!   (or on the first frame). Every draw item depends on the surface node,
//!   so the whole plan is rebuilt.
//! - [`SCALE`] is marked on the panel node while the press spring moves.
//!   Only the frosted region, the border and the label depend on the panel.
//! - [`ROTATION`] is marked directly on the border item every tick; nothing
//!   else depends on the angle.
//!
//! Backdrop and circles never appear in a drain unless [`LAYOUT`] is dirty,
//! which is what keeps steady-state damage confined to the panel.

use understory_dirty::Channel;

/// Gradient angle changed. Local to the border.
pub const ROTATION: Channel = Channel::new(0);

/// Press scale changed. Propagates from the panel to its scaled items.
pub const SCALE: Channel = Channel::new(1);

/// Surface size or density changed. Propagates to every item.
pub const LAYOUT: Channel = Channel::new(2);
