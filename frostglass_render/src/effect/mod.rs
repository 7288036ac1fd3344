// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The animated frosted-glass effect.
//!
//! A mounted effect draws, back to front:
//!
//! ```text
//!   0  backdrop fill                 ┐
//!   1  circle (palette[0])           │ sampled by the blur
//!   2  circle (palette[1])           │
//!   3  circle (palette[2])           │
//!   4  circle (palette[3])           ┘
//!   5  backdrop blur (frosted panel)  ◄─ press scale
//!   6  gradient border                ◄─ press scale, rotation
//!   7  label                          ◄─ press scale
//! ```
//!
//! [`EffectRenderContext`] holds the animation state, [`EffectLayout`] the
//! pixel geometry, and [`GlassEffect`] ties both to a [`RenderPlan`] that is
//! updated incrementally on each [`frame`](GlassEffect::frame).
//!
//! [`RenderPlan`]: crate::RenderPlan

mod context;
mod layout;
mod renderer;

pub use context::{
    BACKDROP_COLOR, CIRCLE_ANCHORS, EffectRenderContext, PALETTE, PRESSED_SCALE, RELEASED_SCALE,
};
pub use layout::{
    BORDER_CORNER_RADIUS, BORDER_WIDTH, CIRCLE_RADIUS, EffectLayout, LABEL_PADDING, LABEL_TEXT,
    PANEL_CORNER_RADIUS, PANEL_SIZE, REFERENCE_SIZE,
};
pub use renderer::{FrameOutput, GlassEffect, ItemSlot};
