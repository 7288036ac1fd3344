// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-driven animations.
//!
//! Both animations are sampled from frame ticks rather than integrated from
//! a fixed step, so a dropped frame changes how often values are observed
//! but not where they end up.
//!
//! - [`InfiniteRotation`]: linear 0°→360° sweep that restarts forever.
//! - [`SpringAnimation`]: analytically solved damped spring that retargets
//!   without losing velocity.

mod rotation;
mod spring;

pub use rotation::{InfiniteRotation, RotationSpec};
pub use spring::{SpringAnimation, SpringSpec};
