//! # Action Snapshots
//!
//! One [`ActionSnapshot`] is built per tick by whatever maps raw controls
//! (gamepad, script, network message) onto the rig. Construction is the
//! validation boundary: an instance that exists is always in range.
//!
//! Two construction paths are offered. [`ActionSnapshot::new`] takes typed
//! Rust values and only has ranges left to check. The JSON path
//! ([`ActionSnapshot::from_json_value`], [`ActionSnapshot::from_json_str`])
//! receives dynamically typed data and additionally rejects values of the
//! wrong kind, so an integer `1` is refused where a float `1.0` is required.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ActionError, ActionField};

const CONTROL_MIN: f64 = -1.0;
const CONTROL_MAX: f64 = 1.0;

/// Validated, immutable control input for a single tick.
///
/// Fields can only be read:
///
/// ```compile_fail
/// let mut action = rig::ActionSnapshot::neutral();
/// action.legs = 1.0;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ActionSnapshot {
    legs: f64,
    body: f64,
    arms: f64,
    handle_height: f64,
    toggle_feather: bool,
}

impl ActionSnapshot {
    /// Build a snapshot from typed values.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::OutOfRange`] for the first numeric field, in the
    /// order `legs, body, arms, handle_height`, that is outside `[-1.0, 1.0]`.
    /// NaN and infinities are rejected the same way.
    pub fn new(
        legs: f64,
        body: f64,
        arms: f64,
        handle_height: f64,
        toggle_feather: bool,
    ) -> Result<Self, ActionError> {
        let values = [legs, body, arms, handle_height];
        for (field, value) in ActionField::AXES.into_iter().zip(values) {
            check_range(field, value)?;
        }
        Ok(Self {
            legs,
            body,
            arms,
            handle_height,
            toggle_feather,
        })
    }

    /// All axes at rest and no feather toggle.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            legs: 0.0,
            body: 0.0,
            arms: 0.0,
            handle_height: 0.0,
            toggle_feather: false,
        }
    }

    /// Build a snapshot from a JSON object with the keys `legs`, `body`,
    /// `arms`, `handle_height` and `toggle_feather`.
    ///
    /// Fields are checked in that order. Each numeric field must be a JSON
    /// float and then lie in `[-1.0, 1.0]` before the next field is looked
    /// at; `toggle_feather` must be a JSON boolean. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// [`ActionError::WrongType`] when a field is missing or holds the wrong
    /// kind of value, [`ActionError::OutOfRange`] for out-of-range floats and
    /// [`ActionError::Malformed`] when the payload is not an object.
    pub fn from_json_value(value: &Value) -> Result<Self, ActionError> {
        let Value::Object(map) = value else {
            return Err(ActionError::Malformed(format!(
                "expected an object, got {}",
                json_kind(Some(value))
            )));
        };

        let mut axes = [0.0_f64; 4];
        for (slot, field) in axes.iter_mut().zip(ActionField::AXES) {
            let raw = map.get(field.key());
            let number = match raw {
                Some(Value::Number(n)) if n.is_f64() => n.as_f64(),
                _ => None,
            };
            let Some(number) = number else {
                return Err(ActionError::WrongType {
                    field,
                    expected: "a float",
                    found: json_kind(raw),
                });
            };
            check_range(field, number)?;
            *slot = number;
        }

        let toggle = map.get(ActionField::ToggleFeather.key());
        let Some(Value::Bool(toggle_feather)) = toggle else {
            return Err(ActionError::WrongType {
                field: ActionField::ToggleFeather,
                expected: "a boolean",
                found: json_kind(toggle),
            });
        };

        let [legs, body, arms, handle_height] = axes;
        Ok(Self {
            legs,
            body,
            arms,
            handle_height,
            toggle_feather: *toggle_feather,
        })
    }

    /// Parse and validate a JSON document, see [`Self::from_json_value`].
    ///
    /// # Errors
    ///
    /// [`ActionError::Malformed`] if `json` does not parse, otherwise the
    /// errors of [`Self::from_json_value`].
    pub fn from_json_str(json: &str) -> Result<Self, ActionError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| ActionError::Malformed(e.to_string()))?;
        Self::from_json_value(&value)
    }

    #[must_use]
    pub const fn legs(&self) -> f64 {
        self.legs
    }

    #[must_use]
    pub const fn body(&self) -> f64 {
        self.body
    }

    #[must_use]
    pub const fn arms(&self) -> f64 {
        self.arms
    }

    /// Control value for the handle axis.
    #[must_use]
    pub const fn handle_height(&self) -> f64 {
        self.handle_height
    }

    #[must_use]
    pub const fn toggle_feather(&self) -> bool {
        self.toggle_feather
    }
}

impl Default for ActionSnapshot {
    fn default() -> Self {
        Self::neutral()
    }
}

fn check_range(field: ActionField, value: f64) -> Result<(), ActionError> {
    // NaN fails `contains`, as do both infinities.
    if (CONTROL_MIN..=CONTROL_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ActionError::OutOfRange { field, value })
    }
}

fn json_kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(n)) if n.is_f64() => "a float",
        Some(Value::Number(_)) => "an integer",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "an array",
        Some(Value::Object(_)) => "an object",
    }
}
