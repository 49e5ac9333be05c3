//! Property-based tests for solver part bounds validation

use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Solver with a configurable part count that echoes the part it was asked for
struct Echo<const N: u8>;

impl<const N: u8> AocParser for Echo<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Echo<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

fn checked(parts: u8, part: u8) -> (u8, Result<String, SolveError>) {
    let mut shared = ();
    match parts {
        1 => (1, Echo::<1>::solve_part_checked_range(&mut shared, part)),
        3 => (3, Echo::<3>::solve_part_checked_range(&mut shared, part)),
        _ => (2, Echo::<2>::solve_part_checked_range(&mut shared, part)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Part 0 and parts above `PARTS` are rejected before reaching the solver.
    #[test]
    fn out_of_range_rejected(parts in 1u8..=3, part in 0u8..=255) {
        let (max, result) = checked(parts, part);

        if part == 0 || part > max {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{part}"));
        }
    }

    /// In range, the checked call gives the same answer as the direct one.
    #[test]
    fn in_range_delegates(part in 1u8..=2) {
        let checked = Echo::<2>::solve_part_checked_range(&mut (), part).unwrap();
        let direct = Echo::<2>::solve_part(&mut (), part).unwrap();
        prop_assert_eq!(checked, direct);
    }
}

#[test]
fn test_single_part_solver_rejects_part_two() {
    let result = Echo::<1>::solve_part_checked_range(&mut (), 2);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(2))));
}
