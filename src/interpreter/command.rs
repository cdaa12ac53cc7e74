// SPDX-License-Identifier: MIT

//! Commands gated by checks

use crate::error::SnapshotError;
use crate::interpreter::condition::Check;
use crate::interpreter::snapshot::GameSnapshot;

/// An authored action and the checks that must all hold before it fires
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    name: String,
    action: String,
    checks: Vec<Check>,
}

impl Command {
    pub fn new(name: impl Into<String>, action: impl Into<String>, checks: Vec<Check>) -> Self {
        Self {
            name: name.into(),
            action: action.into(),
            checks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Whether every check holds for the snapshot. No checks means always.
    pub fn can_execute<S: GameSnapshot + ?Sized>(
        &self,
        snapshot: &S,
    ) -> Result<bool, SnapshotError> {
        let allowed = all_satisfied(&self.checks, snapshot)?;
        log::debug!(
            "Command {} {}",
            self.name,
            if allowed { "allowed" } else { "blocked" }
        );
        Ok(allowed)
    }
}

/// Conjunction of checks. Stops at the first check that does not hold.
pub fn all_satisfied<'a, S, I>(checks: I, snapshot: &S) -> Result<bool, SnapshotError>
where
    S: GameSnapshot + ?Sized,
    I: IntoIterator<Item = &'a Check>,
{
    for check in checks {
        if !check.is_satisfied(snapshot)? {
            return Ok(false);
        }
    }
    Ok(true)
}
