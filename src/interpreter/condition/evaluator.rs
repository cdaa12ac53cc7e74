//! Check evaluator
//!
//! Resolves operands against a snapshot and applies the comparison.

use super::ast::{Check, GameData, Operand, Operator};
use crate::error::SnapshotError;
use crate::interpreter::snapshot::{GameSnapshot, PlayerId};

/// Evaluate a check against a snapshot
pub fn evaluate<S: GameSnapshot + ?Sized>(
    check: &Check,
    snapshot: &S,
) -> Result<bool, SnapshotError> {
    let left = resolve_operand(check.left(), snapshot)?;
    let right = resolve_operand(check.right(), snapshot)?;
    let result = compare(check.op(), left, right);

    log::debug!("{} => {} ({} vs {})", check, result, left, right);
    Ok(result)
}

/// Read the current value of a game quantity
pub fn resolve<S: GameSnapshot + ?Sized>(
    data: GameData,
    snapshot: &S,
) -> Result<i32, SnapshotError> {
    match data {
        GameData::UserHealth => snapshot.health(PlayerId::USER),
        GameData::OpponentHealth => snapshot.health(PlayerId::OPPONENT),
        GameData::DistanceFromOpponent => snapshot
            .distance(PlayerId::USER, PlayerId::OPPONENT)
            .map(round_half_up),
    }
}

pub fn resolve_operand<S: GameSnapshot + ?Sized>(
    operand: Operand,
    snapshot: &S,
) -> Result<i32, SnapshotError> {
    match operand {
        Operand::Data(data) => resolve(data, snapshot),
        Operand::Value(value) => Ok(value),
    }
}

pub fn compare(op: Operator, left: i32, right: i32) -> bool {
    match op {
        Operator::LessThan => left < right,
        Operator::GreaterThan => left > right,
        Operator::LessThanOrEqualTo => left <= right,
        Operator::GreaterThanOrEqualTo => left >= right,
        Operator::EqualTo => left == right,
    }
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// `x - x.floor()` is exact for finite doubles, so values just below a half
/// (0.49999999999999994) still round down. Out of range values saturate and
/// NaN becomes 0.
pub fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::condition::parser::parse;
    use std::cell::Cell;

    /// Snapshot with fixed answers that counts how often it is read
    struct FixedSnapshot {
        user_health: i32,
        opponent_health: i32,
        distance: f64,
        reads: Cell<usize>,
    }

    impl FixedSnapshot {
        fn new(user_health: i32, opponent_health: i32, distance: f64) -> Self {
            Self {
                user_health,
                opponent_health,
                distance,
                reads: Cell::new(0),
            }
        }
    }

    impl GameSnapshot for FixedSnapshot {
        fn health(&self, player: PlayerId) -> Result<i32, SnapshotError> {
            self.reads.set(self.reads.get() + 1);
            match player {
                PlayerId::USER => Ok(self.user_health),
                PlayerId::OPPONENT => Ok(self.opponent_health),
                other => Err(SnapshotError::UnknownPlayer(other)),
            }
        }

        fn distance(&self, from: PlayerId, to: PlayerId) -> Result<f64, SnapshotError> {
            self.reads.set(self.reads.get() + 1);
            assert_eq!((from, to), (PlayerId::USER, PlayerId::OPPONENT));
            Ok(self.distance)
        }
    }

    /// Snapshot with no opponent present
    struct SoloSnapshot;

    impl GameSnapshot for SoloSnapshot {
        fn health(&self, player: PlayerId) -> Result<i32, SnapshotError> {
            match player {
                PlayerId::USER => Ok(100),
                other => Err(SnapshotError::UnknownPlayer(other)),
            }
        }

        fn distance(&self, _from: PlayerId, to: PlayerId) -> Result<f64, SnapshotError> {
            Err(SnapshotError::UnknownPlayer(to))
        }
    }

    #[test]
    fn test_compare_matches_native_ordering() {
        let values = [i32::MIN, -7, -1, 0, 1, 3, 4, 5, i32::MAX];
        for a in values {
            for b in values {
                assert_eq!(compare(Operator::LessThan, a, b), a < b);
                assert_eq!(compare(Operator::GreaterThan, a, b), a > b);
                assert_eq!(compare(Operator::LessThanOrEqualTo, a, b), a <= b);
                assert_eq!(compare(Operator::GreaterThanOrEqualTo, a, b), a >= b);
                assert_eq!(compare(Operator::EqualTo, a, b), a == b);
            }
        }
    }

    #[test]
    fn test_compare_examples() {
        assert!(compare(Operator::LessThan, 3, 5));
        assert!(!compare(Operator::LessThan, 5, 3));
        assert!(compare(Operator::EqualTo, 4, 4));
        assert!(Operator::GreaterThanOrEqualTo.apply(4, 4));
        assert!(!Operator::GreaterThan.apply(4, 4));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(4.5), 5);
        assert_eq!(round_half_up(4.4), 4);
        assert_eq!(round_half_up(4.6), 5);
        assert_eq!(round_half_up(7.5), 8);
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(-0.0), 0);
        assert_eq!(round_half_up(0.49999999999999994), 0);
    }

    #[test]
    fn test_round_half_up_negative() {
        // Ties go toward positive infinity on both sides of zero
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-4.5), -4);
        assert_eq!(round_half_up(-4.4), -4);
        assert_eq!(round_half_up(-4.6), -5);
    }

    #[test]
    fn test_round_half_up_out_of_range() {
        assert_eq!(round_half_up(f64::NAN), 0);
        assert_eq!(round_half_up(f64::INFINITY), i32::MAX);
        assert_eq!(round_half_up(f64::NEG_INFINITY), i32::MIN);
        assert_eq!(round_half_up(1e12), i32::MAX);
    }

    #[test]
    fn test_resolve_reads_snapshot() {
        let snapshot = FixedSnapshot::new(10, 20, 4.4);
        assert_eq!(resolve(GameData::UserHealth, &snapshot), Ok(10));
        assert_eq!(resolve(GameData::OpponentHealth, &snapshot), Ok(20));
        assert_eq!(resolve(GameData::DistanceFromOpponent, &snapshot), Ok(4));
        assert_eq!(resolve_operand(Operand::Value(-12), &snapshot), Ok(-12));
    }

    #[test]
    fn test_resolve_does_not_transform_health() {
        let snapshot = FixedSnapshot::new(-3, 0, 0.0);
        assert_eq!(resolve(GameData::UserHealth, &snapshot), Ok(-3));
        assert_eq!(resolve(GameData::OpponentHealth, &snapshot), Ok(0));
    }

    #[test]
    fn test_health_comparison_scenario() {
        let snapshot = FixedSnapshot::new(10, 20, 3.0);

        let check = Check::new(
            GameData::UserHealth,
            GameData::OpponentHealth,
            Operator::LessThan,
        );
        assert_eq!(evaluate(&check, &snapshot), Ok(true));

        let check = Check::new(
            GameData::UserHealth,
            GameData::OpponentHealth,
            Operator::GreaterThanOrEqualTo,
        );
        assert_eq!(evaluate(&check, &snapshot), Ok(false));
    }

    #[test]
    fn test_distance_rounding_scenario() {
        let snapshot = FixedSnapshot::new(10, 20, 7.5);

        let check = Check::with_value(GameData::DistanceFromOpponent, Operator::EqualTo, 8);
        assert_eq!(check.is_satisfied(&snapshot), Ok(true));

        let check = Check::with_value(GameData::DistanceFromOpponent, Operator::EqualTo, 7);
        assert_eq!(check.is_satisfied(&snapshot), Ok(false));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let snapshot = FixedSnapshot::new(15, 15, 2.5);
        for op in Operator::ALL {
            let check = Check::compare(GameData::DistanceFromOpponent, op, GameData::UserHealth);
            let first = evaluate(&check, &snapshot);
            let second = evaluate(&check, &snapshot);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_evaluate_reads_each_operand_once() {
        let snapshot = FixedSnapshot::new(1, 2, 0.0);
        let check = parse("UserHealth < OpponentHealth").unwrap();
        evaluate(&check, &snapshot).unwrap();
        assert_eq!(snapshot.reads.get(), 2);

        let check = parse("3 < 4").unwrap();
        assert_eq!(evaluate(&check, &snapshot), Ok(true));
        assert_eq!(snapshot.reads.get(), 2);
    }

    #[test]
    fn test_snapshot_errors_propagate() {
        let check = parse("UserHealth > OpponentHealth").unwrap();
        assert_eq!(
            evaluate(&check, &SoloSnapshot),
            Err(SnapshotError::UnknownPlayer(PlayerId::OPPONENT))
        );

        let check = parse("DistanceFromOpponent <= 2").unwrap();
        assert!(evaluate(&check, &SoloSnapshot).is_err());

        let check = parse("UserHealth == 100").unwrap();
        assert_eq!(evaluate(&check, &SoloSnapshot), Ok(true));
    }
}
