//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses a day's raw input into the data its parts share.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Reports;
///
/// impl AocParser for Reports {
///     type SharedData<'a> = Vec<Vec<i64>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| {
///                 l.split_whitespace()
///                     .map(|t| t.parse().map_err(ParseError::invalid))
///                     .collect()
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Reports::parse("1 2\n3 4").unwrap(), vec![vec![1, 2], vec![3, 4]]);
/// ```
pub trait AocParser {
    /// Parsed input plus anything one part leaves behind for the next.
    ///
    /// The lifetime lets a solver borrow from the raw input instead of copying it.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Sum;
///
/// impl AocParser for Sum {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input.lines().map(|l| l.parse().map_err(ParseError::invalid)).collect()
///     }
/// }
///
/// impl PartSolver<1> for Sum {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i64>().to_string())
///     }
/// }
///
/// let mut data = Sum::parse("3\n4").unwrap();
/// assert_eq!(<Sum as PartSolver<1>>::solve(&mut data).unwrap(), "7");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete day: parse once, then answer parts `1..=PARTS`.
///
/// Usually generated by `#[derive(AocSolver)]`, which dispatches each part
/// number to the matching [`PartSolver`] impl.
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Returns [`SolveError::PartNotImplemented`] for any part without an implementation.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS` up front.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
