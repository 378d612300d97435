#![deny(clippy::all, clippy::pedantic)]
//! # Rig Runtime
//!
//! Fixed-step driver for [`rig::RigState`]. Each tick an [`ActionSource`]
//! supplies an [`rig::ActionSnapshot`], the rig is updated in place and a
//! [`RigSample`] is recorded for downstream consumers.
//!
//! ```rust
//! use rig::RigState;
//! use runtime::{NeutralSource, TickLoop};
//!
//! let mut ticks = TickLoop::new(RigState::new(1.0, 0.1), 0.5, NeutralSource)?;
//! let trajectory = ticks.run(10)?;
//! assert_eq!(trajectory.len(), 10);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod source;
pub mod tick;

pub use source::{ActionScript, ActionSource, AfterEnd, NeutralSource, ScriptedSource};
pub use tick::{RigSample, TickLoop, Trajectory};
