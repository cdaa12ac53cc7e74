//! Check parser
//!
//! Parses one comparison per line:
//! - `UserHealth < OpponentHealth`
//! - `distance_from_opponent <= 2`
//! - `OpponentHealth == 0`

use super::ast::{Check, GameData, Operand, Operator};
use crate::error::ConditionError;
use std::str::FromStr;

/// Parse a check string
pub fn parse(input: &str) -> Result<Check, ConditionError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ConditionError::Empty);
    }

    let (pos, op_str, op) =
        find_operator(input).ok_or_else(|| ConditionError::MissingOperator(input.to_string()))?;

    let left = parse_operand(&input[..pos], input)?;
    let right = parse_operand(&input[pos + op_str.len()..], input)?;
    Ok(Check::compare(left, op, right))
}

fn find_operator(input: &str) -> Option<(usize, &'static str, Operator)> {
    // Two-character operators first so `<=` is not read as `<`
    let operators = [
        ("<=", Operator::LessThanOrEqualTo),
        (">=", Operator::GreaterThanOrEqualTo),
        ("==", Operator::EqualTo),
        ("<", Operator::LessThan),
        (">", Operator::GreaterThan),
    ];

    operators
        .into_iter()
        .find_map(|(op_str, op)| input.find(op_str).map(|pos| (pos, op_str, op)))
}

fn parse_operand(text: &str, input: &str) -> Result<Operand, ConditionError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ConditionError::MissingOperand(input.to_string()));
    }

    if let Ok(value) = text.parse::<i32>() {
        return Ok(Operand::Value(value));
    }

    GameData::from_name(text)
        .map(Operand::Data)
        .ok_or_else(|| ConditionError::UnknownOperand(text.to_string()))
}

impl FromStr for Check {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<String> for Check {
    type Error = ConditionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse(&value)
    }
}
