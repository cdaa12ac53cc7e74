// SPDX-License-Identifier: MIT

//! YAML schema types for command scripts

use serde::{Deserialize, Serialize};

/// Top-level script definition
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScriptDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Commands in priority order
    #[serde(default)]
    pub commands: Vec<CommandDefinition>,
}

/// A command as authored, checks still in text form
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CommandDefinition {
    pub name: String,
    /// Action handed to the game when the command fires
    pub action: String,
    /// Checks that must all hold, e.g. `UserHealth < OpponentHealth`
    #[serde(default)]
    pub when: Vec<String>,
}
