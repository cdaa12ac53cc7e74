// SPDX-License-Identifier: MIT

//! Check values: what to compare and how

use serde::{Deserialize, Serialize};
use std::fmt;

use super::evaluator;
use crate::error::SnapshotError;
use crate::interpreter::snapshot::GameSnapshot;

/// Live game quantity a check can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GameData {
    /// Health of the player running the script
    UserHealth,
    /// Health of the opponent
    OpponentHealth,
    /// Distance between the two players, rounded to an integer
    DistanceFromOpponent,
}

impl GameData {
    pub const ALL: [GameData; 3] = [
        GameData::UserHealth,
        GameData::OpponentHealth,
        GameData::DistanceFromOpponent,
    ];

    /// Canonical name, as written in scripts
    pub fn name(&self) -> &'static str {
        match self {
            GameData::UserHealth => "UserHealth",
            GameData::OpponentHealth => "OpponentHealth",
            GameData::DistanceFromOpponent => "DistanceFromOpponent",
        }
    }

    /// Look up a data name, accepting `UserHealth`, `user_health` or `userhealth`
    pub fn from_name(name: &str) -> Option<GameData> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "userhealth" => Some(GameData::UserHealth),
            "opponenthealth" => Some(GameData::OpponentHealth),
            "distancefromopponent" => Some(GameData::DistanceFromOpponent),
            _ => None,
        }
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Operator {
    /// <
    LessThan,
    /// >
    GreaterThan,
    /// <=
    LessThanOrEqualTo,
    /// >=
    GreaterThanOrEqualTo,
    /// ==
    EqualTo,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::LessThan,
        Operator::GreaterThan,
        Operator::LessThanOrEqualTo,
        Operator::GreaterThanOrEqualTo,
        Operator::EqualTo,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessThanOrEqualTo => "<=",
            Operator::GreaterThanOrEqualTo => ">=",
            Operator::EqualTo => "==",
        }
    }

    /// Apply the operator to two resolved values
    pub fn apply(self, left: i32, right: i32) -> bool {
        evaluator::compare(self, left, right)
    }
}

/// One side of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Read from the snapshot
    Data(GameData),
    /// Fixed value entered by the script author
    Value(i32),
}

impl From<GameData> for Operand {
    fn from(data: GameData) -> Self {
        Operand::Data(data)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Value(value)
    }
}

/// A single comparison gating a command.
///
/// Built once by the authoring layer and evaluated against any number of
/// snapshots. There are no setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Check {
    left: Operand,
    op: Operator,
    right: Operand,
}

impl Check {
    /// Compare two game quantities
    pub fn new(left: GameData, right: GameData, op: Operator) -> Self {
        Self::compare(left, op, right)
    }

    /// Compare a game quantity with a fixed value
    pub fn with_value(left: GameData, op: Operator, value: i32) -> Self {
        Self::compare(left, op, value)
    }

    /// Compare any two operands
    pub fn compare(left: impl Into<Operand>, op: Operator, right: impl Into<Operand>) -> Self {
        Self {
            left: left.into(),
            op,
            right: right.into(),
        }
    }

    pub fn left(&self) -> Operand {
        self.left
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn right(&self) -> Operand {
        self.right
    }

    /// Whether the comparison holds for the given snapshot
    pub fn is_satisfied<S: GameSnapshot + ?Sized>(
        &self,
        snapshot: &S,
    ) -> Result<bool, SnapshotError> {
        evaluator::evaluate(self, snapshot)
    }
}

impl fmt::Display for GameData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Data(data) => write!(f, "{}", data),
            Operand::Value(value) => write!(f, "{}", value),
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

impl From<Check> for String {
    fn from(check: Check) -> Self {
        check.to_string()
    }
}
