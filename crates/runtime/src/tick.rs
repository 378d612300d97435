//! # Tick Loop
//!
//! Drives a [`RigState`] at a fixed time step, pulling one action per tick
//! from an [`ActionSource`] and recording the resulting state.

use anyhow::{Context, Result};
use rig::{RigPositions, RigState, RigVelocities};
use serde::Serialize;

use crate::source::{ActionScript, ActionSource, ScriptedSource};

const LOG_EVERY: u64 = 50;
const PREALLOC_LIMIT: u64 = 4096;

/// State of the rig right after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RigSample {
    pub tick: u64,
    pub pos: RigPositions,
    pub vel: RigVelocities,
    pub feather: bool,
}

impl RigSample {
    fn capture(tick: u64, state: &RigState) -> Self {
        Self {
            tick,
            pos: state.pos,
            vel: state.vel,
            feather: state.feather,
        }
    }
}

/// Samples recorded by [`TickLoop::run`], in tick order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Trajectory {
    samples: Vec<RigSample>,
}

impl Trajectory {
    #[must_use]
    pub fn samples(&self) -> &[RigSample] {
        &self.samples
    }

    #[must_use]
    pub fn final_sample(&self) -> Option<&RigSample> {
        self.samples.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// True when both trajectories hold the same samples down to the bit
    /// pattern of every float (so `0.0` and `-0.0` differ, and equal NaNs match).
    #[must_use]
    pub fn bit_identical(&self, other: &Self) -> bool {
        fn bits(s: &RigSample) -> (u64, [u64; 8], bool) {
            (
                s.tick,
                [
                    s.pos.legs.to_bits(),
                    s.pos.body.to_bits(),
                    s.pos.arms.to_bits(),
                    s.pos.handle.to_bits(),
                    s.vel.legs.to_bits(),
                    s.vel.body.to_bits(),
                    s.vel.arms.to_bits(),
                    s.vel.handle.to_bits(),
                ],
                s.feather,
            )
        }
        self.samples.len() == other.samples.len()
            && self
                .samples
                .iter()
                .zip(&other.samples)
                .all(|(a, b)| bits(a) == bits(b))
    }
}

/// Fixed-step simulation loop owning one rig.
pub struct TickLoop<S> {
    state: RigState,
    dt: f64,
    source: S,
    tick: u64,
}

impl<S: ActionSource> TickLoop<S> {
    /// # Errors
    ///
    /// Fails when `dt` is not strictly positive.
    pub fn new(state: RigState, dt: f64, source: S) -> Result<Self> {
        anyhow::ensure!(dt > 0.0, "tick dt must be strictly positive, got {dt}");
        Ok(Self {
            state,
            dt,
            source,
            tick: 0,
        })
    }

    #[must_use]
    pub fn state(&self) -> &RigState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> RigState {
        self.state
    }

    /// Number of ticks run so far.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Run `ticks` more ticks and return the samples they produced.
    ///
    /// # Errors
    ///
    /// Stops at the first tick whose action cannot be produced or whose
    /// update fails; the error names that tick. Ticks before it have been
    /// applied to the rig.
    pub fn run(&mut self, ticks: u64) -> Result<Trajectory> {
        tracing::info!(ticks, dt = self.dt, "starting rig loop");
        let mut samples = Vec::with_capacity(usize::try_from(ticks.min(PREALLOC_LIMIT)).unwrap_or(0));

        for _ in 0..ticks {
            let tick = self.tick;
            let action = self
                .source
                .next_action(tick)
                .with_context(|| format!("no action for tick {tick}"))?;
            self.state
                .update(self.dt, &action)
                .with_context(|| format!("update failed at tick {tick}"))?;
            samples.push(RigSample::capture(tick, &self.state));
            self.tick += 1;

            if self.tick % LOG_EVERY == 0 {
                tracing::info!(
                    tick = self.tick,
                    legs = self.state.pos.legs,
                    handle = self.state.pos.handle,
                    feather = self.state.feather,
                    "rig loop progress"
                );
            }
        }

        tracing::info!(tick = self.tick, final_pos = ?self.state.pos, "rig loop finished");
        Ok(Trajectory { samples })
    }
}

impl TickLoop<ScriptedSource> {
    /// Loop replaying `script` at the script's own time step.
    ///
    /// # Errors
    ///
    /// Fails when the script's `dt` is not strictly positive.
    pub fn from_script(state: RigState, script: ActionScript) -> Result<Self> {
        let dt = script.dt;
        Self::new(state, dt, ScriptedSource::new(script))
    }
}
