//! # Action Sources
//!
//! An [`ActionSource`] supplies the [`ActionSnapshot`] for each tick. Real
//! input mapping (gamepads, network peers) lives outside this workspace and
//! plugs in through the trait; [`NeutralSource`] and [`ScriptedSource`] cover
//! idle rigs and replayable JSON scripts.
//!
//! A script looks like:
//!
//! ```json
//! {
//!   "dt": 0.5,
//!   "after_end": "loop",
//!   "actions": [
//!     { "legs": 1.0, "body": 0.0, "arms": 0.0, "handle_height": 0.0, "toggle_feather": false }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rig::ActionSnapshot;
use serde::Deserialize;
use serde_json::Value;

/// Produces one action per tick.
pub trait ActionSource {
    /// Action for the tick numbered `tick` (starting at 0).
    ///
    /// # Errors
    ///
    /// Implementations fail when no valid action can be produced.
    fn next_action(&mut self, tick: u64) -> Result<ActionSnapshot>;
}

/// Always returns [`ActionSnapshot::neutral`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NeutralSource;

impl ActionSource for NeutralSource {
    fn next_action(&mut self, _tick: u64) -> Result<ActionSnapshot> {
        Ok(ActionSnapshot::neutral())
    }
}

impl<F> ActionSource for F
where
    F: FnMut(u64) -> Result<ActionSnapshot>,
{
    fn next_action(&mut self, tick: u64) -> Result<ActionSnapshot> {
        self(tick)
    }
}

/// What a script does once its actions run out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AfterEnd {
    /// Feed neutral actions.
    #[default]
    Neutral,
    /// Keep repeating the last action, minus any feather toggle.
    Hold,
    /// Start over from the first action.
    Loop,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScript {
    #[serde(default = "default_dt")]
    dt: f64,
    #[serde(default)]
    after_end: AfterEnd,
    actions: Vec<Value>,
}

fn default_dt() -> f64 {
    1.0 / 60.0
}

/// A validated action script.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionScript {
    pub dt: f64,
    pub after_end: AfterEnd,
    pub actions: Vec<ActionSnapshot>,
}

impl ActionScript {
    /// Parse a script and validate every action in it up front.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, a non-positive `dt`, an empty action list or
    /// the first action that does not pass [`ActionSnapshot::from_json_value`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawScript = serde_json::from_str(json).context("malformed action script")?;
        anyhow::ensure!(raw.dt > 0.0, "script dt must be strictly positive, got {}", raw.dt);
        anyhow::ensure!(!raw.actions.is_empty(), "script contains no actions");

        let actions = raw
            .actions
            .iter()
            .enumerate()
            .map(|(i, value)| {
                ActionSnapshot::from_json_value(value).with_context(|| format!("action #{i}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            dt: raw.dt,
            after_end: raw.after_end,
            actions,
        })
    }

    /// Read and parse a script file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse, see [`Self::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read action script {}", path.display()))?;
        let script =
            Self::from_json_str(&json).with_context(|| format!("in action script {}", path.display()))?;
        tracing::debug!(?path, actions = script.actions.len(), "loaded action script");
        Ok(script)
    }
}

/// Replays an [`ActionScript`].
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    actions: Vec<ActionSnapshot>,
    after_end: AfterEnd,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(script: ActionScript) -> Self {
        Self {
            actions: script.actions,
            after_end: script.after_end,
        }
    }

    fn held(last: ActionSnapshot) -> Result<ActionSnapshot> {
        // Holding must not re-toggle feather on every tick.
        ActionSnapshot::new(
            last.legs(),
            last.body(),
            last.arms(),
            last.handle_height(),
            false,
        )
        .context("re-validating held action")
    }
}

impl ActionSource for ScriptedSource {
    fn next_action(&mut self, tick: u64) -> Result<ActionSnapshot> {
        let len = self.actions.len();
        let index = usize::try_from(tick).unwrap_or(usize::MAX);
        if let Some(action) = self.actions.get(index) {
            return Ok(*action);
        }
        match (self.after_end, self.actions.last()) {
            (_, None) | (AfterEnd::Neutral, _) => Ok(ActionSnapshot::neutral()),
            (AfterEnd::Hold, Some(last)) => Self::held(*last),
            (AfterEnd::Loop, Some(_)) => {
                let wrapped = tick % len as u64;
                let wrapped = usize::try_from(wrapped).context("tick index overflow")?;
                Ok(self.actions[wrapped])
            }
        }
    }
}
