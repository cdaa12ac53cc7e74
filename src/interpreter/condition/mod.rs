// SPDX-License-Identifier: MIT

//! Checks gating scripted commands
//!
//! A check compares two integers read from the game, or one read value and a
//! fixed number:
//! - `UserHealth < OpponentHealth`
//! - `DistanceFromOpponent <= 2`
//!
//! Only the data names and operators listed in [`GameData`] and [`Operator`]
//! exist, so evaluation never meets an unknown case.

mod ast;
mod evaluator;
mod parser;

pub use ast::{Check, GameData, Operand, Operator};
pub use evaluator::{evaluate, resolve, round_half_up};
pub use parser::parse;
