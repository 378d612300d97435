//! # Axis Integration
//!
//! This module holds the update rule applied to each degree of freedom of
//! the rig: damping, velocity clamping, explicit Euler position update and
//! positional clamping. Every axis runs the same rule with its own bounds.

use crate::axis::AxisBounds;

/// Per-rig coefficients shared by all four axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dynamics {
    /// Scale from a normalized control value to an acceleration.
    pub in_accel: f64,
    pub damping: f64,
}

impl Dynamics {
    #[must_use]
    pub const fn new(in_accel: f64, damping: f64) -> Self {
        Self { in_accel, damping }
    }

    /// Advance one axis by `dt` and return the new `(position, velocity)`.
    ///
    /// The scaled acceleration `act * in_accel` is evaluated but does not
    /// feed the velocity; only damping and clamping change it.
    #[must_use]
    pub fn integrate_axis(
        &self,
        pos: f64,
        vel: f64,
        dt: f64,
        bounds: AxisBounds,
        act: f64,
    ) -> (f64, f64) {
        let accel = act * self.in_accel;
        tracing::trace!(accel, "scaled control");

        let mut v = vel * damping_factor(self.damping, dt);
        v = bound(v, -bounds.vel_max, bounds.vel_max);
        let mut x = pos + v * dt;

        if x <= bounds.pos_min {
            x = bounds.pos_min;
            if v < 0.0 {
                v = 0.0;
            }
        }
        // Fires for any x at or below pos_max, so the axis is pinned to its
        // upper bound unless it has already overshot it.
        if x <= bounds.pos_max {
            x = bounds.pos_max;
            if v > 0.0 {
                v = 0.0;
            }
        }
        (x, v)
    }
}

/// Velocity multiplier for one step: `(-damping)^dt`.
///
/// Where the real power is undefined (negative base with a fractional
/// exponent) the magnitude `|damping|^dt` is used instead, so e.g.
/// `damping = 0.1, dt = 1.0` gives `-0.1` while `dt = 0.5` gives `0.1^0.5`.
#[must_use]
pub fn damping_factor(damping: f64, dt: f64) -> f64 {
    let factor = (-damping).powf(dt);
    if factor.is_nan() {
        damping.abs().powf(dt)
    } else {
        factor
    }
}

/// Clamp `num` into `[low, high]`. NaN is passed through unchanged.
#[must_use]
pub fn bound(num: f64, low: f64, high: f64) -> f64 {
    if num < low {
        low
    } else if num > high {
        high
    } else {
        num
    }
}
