//! # Rig State
//!
//! [`RigState`] owns the position and velocity of every axis together with
//! the feather flag, and advances them one fixed step per [`RigState::update`].

use serde::Serialize;

use crate::action::ActionSnapshot;
use crate::axis::Axis;
use crate::config::RigConfig;
use crate::error::{ConfigError, StepError};
use crate::integrator::Dynamics;

/// Position of every axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RigPositions {
    pub legs: f64,
    pub body: f64,
    pub arms: f64,
    pub handle: f64,
}

/// Velocity of every axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RigVelocities {
    pub legs: f64,
    pub body: f64,
    pub arms: f64,
    pub handle: f64,
}

macro_rules! axis_accessors {
    ($ty:ty) => {
        impl $ty {
            #[must_use]
            pub const fn new(legs: f64, body: f64, arms: f64, handle: f64) -> Self {
                Self {
                    legs,
                    body,
                    arms,
                    handle,
                }
            }

            #[must_use]
            pub const fn get(&self, axis: Axis) -> f64 {
                match axis {
                    Axis::Legs => self.legs,
                    Axis::Body => self.body,
                    Axis::Arms => self.arms,
                    Axis::Handle => self.handle,
                }
            }

            pub fn set(&mut self, axis: Axis, value: f64) {
                match axis {
                    Axis::Legs => self.legs = value,
                    Axis::Body => self.body = value,
                    Axis::Arms => self.arms = value,
                    Axis::Handle => self.handle = value,
                }
            }
        }
    };
}

axis_accessors!(RigPositions);
axis_accessors!(RigVelocities);

/// Kinematic state of one rig.
#[derive(Clone, Debug, PartialEq)]
pub struct RigState {
    pub pos: RigPositions,
    pub vel: RigVelocities,
    pub feather: bool,
    dynamics: Dynamics,
}

impl RigState {
    /// A rig at rest at the origin of every axis, feathered.
    #[must_use]
    pub fn new(in_accel: f64, damping: f64) -> Self {
        Self {
            pos: RigPositions::default(),
            vel: RigVelocities::default(),
            feather: true,
            dynamics: Dynamics::new(in_accel, damping),
        }
    }

    /// Build a rig from a configuration, rejecting non-finite coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFinite`] if `in_accel` or `damping` is NaN or
    /// infinite.
    pub fn from_config(config: &RigConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.in_accel, config.damping))
    }

    #[must_use]
    pub const fn in_accel(&self) -> f64 {
        self.dynamics.in_accel
    }

    #[must_use]
    pub const fn damping(&self) -> f64 {
        self.dynamics.damping
    }

    /// Advance every axis by `dt`.
    ///
    /// A set `toggle_feather` flips [`RigState::feather`] first. Each axis is
    /// then integrated from its own previous position and velocity only.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NonPositiveDt`] when `dt` is zero, negative or
    /// NaN. The state is left untouched in that case.
    pub fn update(&mut self, dt: f64, action: &ActionSnapshot) -> Result<(), StepError> {
        if dt.is_nan() || dt <= 0.0 {
            return Err(StepError::NonPositiveDt(dt));
        }

        if action.toggle_feather() {
            self.feather = !self.feather;
            tracing::debug!(feather = self.feather, "feather toggled");
        }

        for axis in Axis::ALL {
            let (x, v) = self.dynamics.integrate_axis(
                self.pos.get(axis),
                self.vel.get(axis),
                dt,
                axis.bounds(),
                axis.control(action),
            );
            self.pos.set(axis, x);
            self.vel.set(axis, v);
        }

        tracing::trace!(dt, pos = ?self.pos, vel = ?self.vel, "rig stepped");
        Ok(())
    }
}
