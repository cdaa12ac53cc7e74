// SPDX-License-Identifier: MIT

//! Typed error handling for carnage-check
//!
//! Evaluation itself cannot fail on a well-formed check; every error here comes
//! either from reading text (conditions, scripts, snapshots) or from the
//! snapshot provider.

use crate::interpreter::snapshot::PlayerId;
use thiserror::Error;

/// Top-level error type for carnage-check
#[derive(Debug, Error)]
pub enum CarnageError {
    /// Malformed condition text
    #[error("Condition error: {0}")]
    Condition(#[from] ConditionError),

    /// Snapshot could not answer a query
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Script-level errors
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while parsing a textual condition
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConditionError {
    /// Nothing to parse
    #[error("Empty condition")]
    Empty,

    /// No comparison operator between the operands
    #[error("Missing comparison operator in '{0}'")]
    MissingOperator(String),

    /// One side of the comparison is blank
    #[error("Missing operand in '{0}'")]
    MissingOperand(String),

    /// Operand is neither a known data name nor an integer
    #[error("Unknown operand '{0}'")]
    UnknownOperand(String),
}

/// Errors surfaced by a game snapshot provider
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// The snapshot holds no participant with this id
    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),
}

/// Errors raised while compiling a command script
#[derive(Debug, Error)]
pub enum ScriptError {
    /// A `when` entry of a command failed to parse
    #[error("Invalid check '{check}' in command '{command}': {source}")]
    InvalidCheck {
        command: String,
        check: String,
        #[source]
        source: ConditionError,
    },

    /// Two commands share a name
    #[error("Duplicate command name: {0}")]
    DuplicateCommand(String),

    /// File not found when loading a script or snapshot
    #[error("File not found: {0}")]
    FileNotFound(String),
}

impl ScriptError {
    /// Create an invalid check error
    pub fn invalid_check(
        command: impl Into<String>,
        check: impl Into<String>,
        source: ConditionError,
    ) -> Self {
        Self::InvalidCheck {
            command: command.into(),
            check: check.into(),
            source,
        }
    }
}
