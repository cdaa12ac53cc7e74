// SPDX-License-Identifier: MIT

//! Compiled command scripts

use std::collections::HashSet;

use super::command::Command;
use super::condition;
use super::types::ScriptDefinition;
use crate::error::{ScriptError, SnapshotError};
use crate::interpreter::snapshot::GameSnapshot;

/// A script whose checks have all been parsed
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    name: String,
    description: String,
    commands: Vec<Command>,
}

impl Script {
    pub fn new(name: impl Into<String>, description: impl Into<String>, commands: Vec<Command>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            commands,
        }
    }

    /// Parse every check of the definition, rejecting the whole script on the first bad one
    pub fn compile(def: ScriptDefinition) -> Result<Self, ScriptError> {
        let mut seen = HashSet::new();
        let mut commands = Vec::with_capacity(def.commands.len());

        for cmd in def.commands {
            if !seen.insert(cmd.name.clone()) {
                return Err(ScriptError::DuplicateCommand(cmd.name));
            }

            let checks = cmd
                .when
                .iter()
                .map(|text| {
                    condition::parse(text)
                        .map_err(|e| ScriptError::invalid_check(&cmd.name, text, e))
                })
                .collect::<Result<Vec<_>, _>>()?;

            commands.push(Command::new(cmd.name, cmd.action, checks));
        }

        log::debug!("Compiled script {} with {} commands", def.name, commands.len());
        Ok(Self::new(def.name, def.description, commands))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Look up a command by name
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name() == name)
    }

    /// Commands allowed to fire against the snapshot, in script order
    pub fn executable<S: GameSnapshot + ?Sized>(
        &self,
        snapshot: &S,
    ) -> Result<Vec<&Command>, SnapshotError> {
        let mut allowed = Vec::new();
        for command in &self.commands {
            if command.can_execute(snapshot)? {
                allowed.push(command);
            }
        }
        Ok(allowed)
    }

    /// The command to dispatch: the first one whose checks all hold
    pub fn first_executable<S: GameSnapshot + ?Sized>(
        &self,
        snapshot: &S,
    ) -> Result<Option<&Command>, SnapshotError> {
        for command in &self.commands {
            if command.can_execute(snapshot)? {
                log::info!(
                    "Script {} dispatching {} ({})",
                    self.name,
                    command.name(),
                    command.action()
                );
                return Ok(Some(command));
            }
        }
        log::info!("Script {} has no executable command", self.name);
        Ok(None)
    }
}
