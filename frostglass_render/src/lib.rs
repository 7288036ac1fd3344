// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-plan definitions, damage tracking and the glass effect renderer.
//!
//! This crate sits between [`frostglass_core`]'s lifecycle and animation
//! state and a platform painter. It defines:
//!
//! - [`RenderItem`]: a single draw command in the render plan
//! - [`RenderPlan`]: an ordered, back-to-front list of draw commands
//! - [`DamageRegion`]: spatial damage tracking for partial re-rendering
//! - [`Color`], [`Brush`], [`Material`]: paint descriptions
//! - [`effect`]: the animated frosted-glass renderer that produces plans
//!
//! All geometry is in device pixels using [`kurbo`] types.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod color;
mod damage;
pub mod effect;
mod plan;

pub use color::Color;
pub use damage::DamageRegion;
pub use plan::{Brush, Material, RenderItem, RenderPlan};
