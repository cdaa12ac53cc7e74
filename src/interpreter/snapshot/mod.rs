// SPDX-License-Identifier: MIT

//! Read-only game state consumed by checks
//!
//! This module provides:
//! - `GameSnapshot` - the narrow view the evaluator needs (health, distance)
//! - `PlayerId` - participant identifiers, with the two fixed ids
//! - `GameState` - an owned snapshot loaded from YAML or JSON

mod state;

pub use state::{GameState, PlayerState, Position};

use crate::error::SnapshotError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a participant in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// The player running the script
    pub const USER: PlayerId = PlayerId(0);
    /// The player the script is fighting
    pub const OPPONENT: PlayerId = PlayerId(1);
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Point-in-time view of the simulation.
///
/// Implementations must not change between calls made during one evaluation;
/// callers that evaluate off the simulation thread should hand over a copy.
pub trait GameSnapshot {
    /// Current health of a participant
    fn health(&self, player: PlayerId) -> Result<i32, SnapshotError>;

    /// Distance between two participants, unrounded
    fn distance(&self, from: PlayerId, to: PlayerId) -> Result<f64, SnapshotError>;
}
