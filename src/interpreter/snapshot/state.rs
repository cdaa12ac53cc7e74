// SPDX-License-Identifier: MIT

//! Owned snapshot of a match

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{GameSnapshot, PlayerId};
use crate::error::{CarnageError, ScriptError, SnapshotError};

/// Grid position of a player in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }
}

/// State of a single participant
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub health: i32,
    #[serde(default)]
    pub position: Position,
}

impl PlayerState {
    pub fn new(id: PlayerId, health: i32, position: Position) -> Self {
        Self {
            id,
            health,
            position,
        }
    }
}

/// Owned, immutable-by-convention copy of the match state
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct GameState {
    #[serde(default)]
    pub players: Vec<PlayerState>,
}

impl GameState {
    /// Create a state holding the given players
    pub fn new(players: Vec<PlayerState>) -> Self {
        Self { players }
    }

    /// Create the usual one-on-one state
    pub fn duel(user: (i32, Position), opponent: (i32, Position)) -> Self {
        Self::new(vec![
            PlayerState::new(PlayerId::USER, user.0, user.1),
            PlayerState::new(PlayerId::OPPONENT, opponent.0, opponent.1),
        ])
    }

    /// Look up a player by id
    pub fn player(&self, id: PlayerId) -> Result<&PlayerState, SnapshotError> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or(SnapshotError::UnknownPlayer(id))
    }

    /// Load a snapshot from a `.json` or YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CarnageError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScriptError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_yaml(&content)
        }
    }

    /// Parse a snapshot from a YAML string
    pub fn parse_yaml(content: &str) -> Result<Self, CarnageError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a snapshot from a JSON string
    pub fn parse_json(content: &str) -> Result<Self, CarnageError> {
        Ok(serde_json::from_str(content)?)
    }
}

impl GameSnapshot for GameState {
    fn health(&self, player: PlayerId) -> Result<i32, SnapshotError> {
        Ok(self.player(player)?.health)
    }

    fn distance(&self, from: PlayerId, to: PlayerId) -> Result<f64, SnapshotError> {
        let from = self.player(from)?;
        let to = self.player(to)?;
        Ok(from.position.distance_to(&to.position))
    }
}
