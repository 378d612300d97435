use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification shared by every contract violation in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field received a value of the wrong kind.
    Type,
    /// A value of the right kind was outside its allowed range.
    Value,
}

/// The field of an [`ActionSnapshot`](crate::ActionSnapshot) an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionField {
    Legs,
    Body,
    Arms,
    HandleHeight,
    ToggleFeather,
}

impl ActionField {
    /// Numeric fields in validation order.
    pub const AXES: [ActionField; 4] = [
        ActionField::Legs,
        ActionField::Body,
        ActionField::Arms,
        ActionField::HandleHeight,
    ];

    /// Key used for this field on the JSON boundary.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ActionField::Legs => "legs",
            ActionField::Body => "body",
            ActionField::Arms => "arms",
            ActionField::HandleHeight => "handle_height",
            ActionField::ToggleFeather => "toggle_feather",
        }
    }
}

impl fmt::Display for ActionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("`{field}` must be {expected}, got {found}")]
    WrongType {
        field: ActionField,
        expected: &'static str,
        found: &'static str,
    },
    #[error("`{field}` must lie in [-1.0, 1.0], got {value}")]
    OutOfRange { field: ActionField, value: f64 },
    #[error("action payload is not valid JSON: {0}")]
    Malformed(String),
}

impl ActionError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ActionError::WrongType { .. } | ActionError::Malformed(_) => ErrorKind::Type,
            ActionError::OutOfRange { .. } => ErrorKind::Value,
        }
    }

    /// Field that failed validation, if the payload got that far.
    #[must_use]
    pub const fn field(&self) -> Option<ActionField> {
        match self {
            ActionError::WrongType { field, .. } | ActionError::OutOfRange { field, .. } => {
                Some(*field)
            }
            ActionError::Malformed(_) => None,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum StepError {
    #[error("time step must be strictly positive, got {0}")]
    NonPositiveDt(f64),
}

impl StepError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            StepError::NonPositiveDt(_) => ErrorKind::Value,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read rig config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rig config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}
