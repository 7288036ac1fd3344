// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped spring with a closed-form solution.
//!
//! The spring has unit mass. With natural frequency `ω₀ = √stiffness` and
//! damping ratio `ζ`, the displacement `x(t) = value(t) - target` follows:
//!
//! ```text
//! ζ < 1 (under-damped):
//!   ω_d  = ω₀·√(1 - ζ²)
//!   x(t) = e^(-ζω₀t) · (A·cos ω_d t + B·sin ω_d t)
//!   A = x₀,  B = (v₀ + ζω₀·x₀) / ω_d
//!
//! ζ = 1 (critically damped):
//!   x(t) = (A + B·t) · e^(-ω₀t),   A = x₀,  B = v₀ + ω₀·x₀
//!
//! ζ > 1 (over-damped):
//!   r₁,₂ = -ω₀·(ζ ∓ √(ζ² - 1))
//!   x(t) = c₁·e^(r₁t) + c₂·e^(r₂t),   c₂ = (v₀ - r₁x₀) / (r₂ - r₁),  c₁ = x₀ - c₂
//! ```
//!
//! Retargeting restarts the solution from the current value and velocity, so
//! motion stays continuous when the target flips mid-flight.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Spring parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio `ζ`. Below 1.0 the spring overshoots.
    pub damping_ratio: f64,
    /// Stiffness `k` for a unit mass.
    pub stiffness: f64,
    /// The spring is considered settled once both the displacement and the
    /// velocity are below this magnitude.
    pub settle_threshold: f64,
}

impl SpringSpec {
    /// Damping ratio with a clearly visible bounce.
    pub const DAMPING_RATIO_MEDIUM_BOUNCY: f64 = 0.5;
    /// Soft, slow stiffness.
    pub const STIFFNESS_LOW: f64 = 200.0;

    /// The press-scale spring: medium bounciness, low stiffness.
    pub const PRESS_SCALE: Self = Self {
        damping_ratio: Self::DAMPING_RATIO_MEDIUM_BOUNCY,
        stiffness: Self::STIFFNESS_LOW,
        settle_threshold: 0.001,
    };

    /// Returns `true` if this spring overshoots its target.
    #[must_use]
    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio < 1.0
    }
}

/// A scalar animated by a damped spring.
#[derive(Clone, Copy, Debug)]
pub struct SpringAnimation {
    spec: SpringSpec,
    target: f64,
    value: f64,
    velocity: f64,
    start_value: f64,
    start_velocity: f64,
    elapsed: f64,
    settled: bool,
}

impl SpringAnimation {
    /// Creates a spring at rest at `initial`.
    ///
    /// # Panics
    ///
    /// Panics if the stiffness is not positive or the damping ratio is
    /// negative.
    #[must_use]
    pub fn new(initial: f64, spec: SpringSpec) -> Self {
        assert!(spec.stiffness > 0.0, "spring stiffness must be positive");
        assert!(
            spec.damping_ratio >= 0.0,
            "spring damping ratio must not be negative"
        );
        Self {
            spec,
            target: initial,
            value: initial,
            velocity: 0.0,
            start_value: initial,
            start_velocity: 0.0,
            elapsed: 0.0,
            settled: true,
        }
    }

    /// Starts animating toward `target` from the current value and velocity.
    pub fn animate_to(&mut self, target: f64) {
        if target == self.target {
            return;
        }
        self.target = target;
        self.start_value = self.value;
        self.start_velocity = self.velocity;
        self.elapsed = 0.0;
        self.settled = false;
    }

    /// Advances the spring by `dt` seconds and returns the new value.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if self.settled || dt.is_nan() || dt <= 0.0 {
            return self.value;
        }
        self.elapsed += dt;
        let (x, v) = self.solve(self.elapsed);
        let threshold = self.spec.settle_threshold;
        if x.abs() < threshold && v.abs() < threshold {
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
        } else {
            self.value = self.target + x;
            self.velocity = v;
        }
        self.value
    }

    /// Returns the current value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the current velocity in units per second.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns the value the spring is moving toward.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns `true` once the spring has come to rest on its target.
    #[inline]
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Returns the spring parameters.
    #[inline]
    #[must_use]
    pub fn spec(&self) -> SpringSpec {
        self.spec
    }

    /// Displacement from target and velocity at `t` seconds after the last
    /// retarget.
    fn solve(&self, t: f64) -> (f64, f64) {
        let x0 = self.start_value - self.target;
        let v0 = self.start_velocity;
        let omega = self.spec.stiffness.sqrt();
        let zeta = self.spec.damping_ratio;

        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + zeta * omega * x0) / omega_d;
            let decay = exp(-zeta * omega * t);
            #[cfg(feature = "std")]
            let (sin, cos) = (omega_d * t).sin_cos();
            #[cfg(not(feature = "std"))]
            let (sin, cos) = ((omega_d * t).sin(), (omega_d * t).cos());
            let x = decay * (a * cos + b * sin);
            let v = decay
                * ((b * omega_d - zeta * omega * a) * cos - (a * omega_d + zeta * omega * b) * sin);
            (x, v)
        } else if zeta == 1.0 {
            let a = x0;
            let b = v0 + omega * x0;
            let decay = exp(-omega * t);
            let x = (a + b * t) * decay;
            let v = (b - omega * (a + b * t)) * decay;
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = (exp(r1 * t), exp(r2 * t));
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        }
    }
}

#[cfg(feature = "std")]
fn exp(x: f64) -> f64 {
    x.exp()
}

#[cfg(not(feature = "std"))]
fn exp(x: f64) -> f64 {
    libm::exp(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run(spring: &mut SpringAnimation, seconds: f64) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut t = 0.0;
        while t < seconds {
            let v = spring.advance(FRAME);
            min = min.min(v);
            max = max.max(v);
            t += FRAME;
        }
        (min, max)
    }

    #[test]
    fn at_rest_until_retargeted() {
        let mut spring = SpringAnimation::new(1.0, SpringSpec::PRESS_SCALE);
        assert!(spring.is_settled());
        assert_eq!(spring.advance(FRAME), 1.0);
    }

    #[test]
    fn press_spring_overshoots_then_settles() {
        let mut spring = SpringAnimation::new(1.0, SpringSpec::PRESS_SCALE);
        spring.animate_to(1.1);
        let (_, max) = run(&mut spring, 0.5);
        assert!(max > 1.1, "medium bouncy spring should overshoot, peak {max}");
        assert!(max < 1.2, "overshoot should stay moderate, peak {max}");

        let _ = run(&mut spring, 2.0);
        assert!(spring.is_settled(), "spring should settle within 2.5s");
        assert_eq!(spring.value(), 1.1);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn release_returns_to_rest_with_undershoot() {
        let mut spring = SpringAnimation::new(1.0, SpringSpec::PRESS_SCALE);
        spring.animate_to(1.1);
        let _ = run(&mut spring, 3.0);
        spring.animate_to(1.0);
        let (min, _) = run(&mut spring, 3.0);
        assert!(min < 1.0, "release should bounce below 1.0, trough {min}");
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn retarget_mid_flight_keeps_velocity() {
        let mut spring = SpringAnimation::new(1.0, SpringSpec::PRESS_SCALE);
        spring.animate_to(1.1);
        for _ in 0..3 {
            let _ = spring.advance(FRAME);
        }
        let moving_up = spring.velocity();
        assert!(moving_up > 0.0, "spring should be moving toward 1.1");
        let before = spring.value();
        spring.animate_to(1.0);
        let after = spring.advance(FRAME);
        assert!(
            after > before,
            "momentum carries the value upward for a frame after retargeting"
        );
    }

    #[test]
    fn double_toggle_restores_original_target() {
        let mut spring = SpringAnimation::new(1.0, SpringSpec::PRESS_SCALE);
        spring.animate_to(1.1);
        spring.animate_to(1.0);
        assert_eq!(spring.target(), 1.0);
        let _ = run(&mut spring, 1.0);
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn critically_and_over_damped_never_overshoot() {
        for zeta in [1.0, 2.0] {
            let spec = SpringSpec {
                damping_ratio: zeta,
                stiffness: 200.0,
                settle_threshold: 0.001,
            };
            assert!(!spec.is_underdamped());
            let mut spring = SpringAnimation::new(0.0, spec);
            spring.animate_to(1.0);
            let (_, max) = run(&mut spring, 3.0);
            assert!(max <= 1.0 + 1e-9, "zeta {zeta} overshot to {max}");
            assert_eq!(spring.value(), 1.0, "zeta {zeta} should settle");
        }
    }

    #[test]
    fn zero_or_nan_step_is_ignored() {
        let mut spring = SpringAnimation::new(1.0, SpringSpec::PRESS_SCALE);
        spring.animate_to(1.1);
        assert_eq!(spring.advance(0.0), 1.0);
        assert_eq!(spring.advance(f64::NAN), 1.0);
        assert!(!spring.is_settled());
    }
}
