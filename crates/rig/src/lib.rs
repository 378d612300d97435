#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Rig Kinematics
//!
//! Kinematic model of a rowing-style rig with four independent degrees of
//! freedom: legs, body, arms and handle. Each axis is a 1-D damped
//! integrator with its own position window and speed limit; all four share
//! the per-rig acceleration scale and damping coefficient.
//!
//! ## Key Components
//!
//! -   **Input:** [`ActionSnapshot`] is the validated control input for one
//!     tick, with every axis value in `[-1.0, 1.0]`.
//! -   **State:** [`RigState`] owns positions, velocities and the feather flag
//!     and advances them with [`RigState::update`].
//! -   **Limits:** [`AXIS_BOUNDS`] is the fixed bound table consulted by the
//!     per-axis rule in [`integrator`].
//! -   **Configuration:** [`RigConfig`] carries the per-rig coefficients and
//!     can be loaded from JSON.
//!
//! ## Usage
//!
//! ```rust
//! use rig::{ActionSnapshot, RigState};
//!
//! let mut state = RigState::new(1.0, 0.1);
//! let action = ActionSnapshot::new(1.0, 0.0, 0.0, 0.0, false)?;
//! state.update(1.0 / 60.0, &action)?;
//! assert!(state.pos.legs <= 1.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod action;
pub mod axis;
pub mod config;
pub mod error;
pub mod integrator;
pub mod state;

pub use action::ActionSnapshot;
pub use axis::{Axis, AxisBounds, AXIS_BOUNDS};
pub use config::RigConfig;
pub use error::{ActionError, ActionField, ConfigError, ErrorKind, StepError};
pub use integrator::{damping_factor, Dynamics};
pub use state::{RigPositions, RigState, RigVelocities};
