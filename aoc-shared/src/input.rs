//! Readers for the recurring puzzle input shapes
//!
//! All readers accept the raw file contents, tolerate a trailing newline and
//! Windows line endings, and report malformed input as [`InputError`].

use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::{Grid, GridError, Point};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid integer {token:?} on line {line}: {source}")]
    InvalidInt {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Marker {0:?} not found in grid")]
    MissingMarker(char),

    #[error("Expected {expected} line(s), found {found}")]
    LineCount { expected: usize, found: usize },
}

/// Input lines without `\r`, with trailing blank lines dropped.
pub fn lines(input: &str) -> Vec<&str> {
    let mut out: Vec<&str> = input.lines().map(|l| l.trim_end_matches('\r')).collect();
    while out.last().is_some_and(|l| l.trim().is_empty()) {
        out.pop();
    }
    out
}

fn parse_token<N: FromStr<Err = ParseIntError>>(
    line: usize,
    token: &str,
) -> Result<N, InputError> {
    token.trim().parse().map_err(|source| InputError::InvalidInt {
        line: line + 1,
        token: token.to_string(),
        source,
    })
}

/// One integer per line.
pub fn int_lines<N: FromStr<Err = ParseIntError>>(input: &str) -> Result<Vec<N>, InputError> {
    lines(input)
        .into_iter()
        .enumerate()
        .map(|(i, l)| parse_token(i, l))
        .collect()
}

/// Each line split on `sep` into integers. A whitespace separator splits on any run of whitespace.
pub fn split_ints<N: FromStr<Err = ParseIntError>>(
    input: &str,
    sep: &str,
) -> Result<Vec<Vec<N>>, InputError> {
    lines(input)
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            if sep.trim().is_empty() {
                l.split_whitespace().map(|t| parse_token(i, t)).collect()
            } else {
                l.split(sep)
                    .filter(|t| !t.trim().is_empty())
                    .map(|t| parse_token(i, t))
                    .collect()
            }
        })
        .collect()
}

/// A single line of `sep`-separated integers.
pub fn single_int_line<N: FromStr<Err = ParseIntError>>(
    input: &str,
    sep: &str,
) -> Result<Vec<N>, InputError> {
    let mut rows = split_ints(input, sep)?;
    if rows.len() != 1 {
        return Err(InputError::LineCount {
            expected: 1,
            found: rows.len(),
        });
    }
    Ok(rows.remove(0))
}

/// Blank-line separated blocks of lines.
pub fn paragraphs(input: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in lines(input) {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

pub fn char_grid(input: &str) -> Result<Grid<char>, InputError> {
    let rows = lines(input)
        .into_iter()
        .map(|l| l.chars().collect())
        .collect();
    Ok(Grid::new(rows)?)
}

/// Character grid plus the position of `marker`, which is replaced by `replacement`.
pub fn char_grid_with_marker(
    input: &str,
    marker: char,
    replacement: char,
) -> Result<(Grid<char>, Point), InputError> {
    let mut grid = char_grid(input)?;
    let p = grid
        .position(|c| *c == marker)
        .ok_or(InputError::MissingMarker(marker))?;
    grid[p] = replacement;
    Ok((grid, p))
}

/// Character grid plus start and goal markers, both replaced by `replacement`.
pub fn char_grid_with_markers(
    input: &str,
    start: char,
    goal: char,
    replacement: char,
) -> Result<(Grid<char>, Point, Point), InputError> {
    let (mut grid, s) = char_grid_with_marker(input, start, replacement)?;
    let g = grid
        .position(|c| *c == goal)
        .ok_or(InputError::MissingMarker(goal))?;
    grid[g] = replacement;
    Ok((grid, s, g))
}

/// Grid of single decimal digits. Non-digit cells become `None`.
pub fn digit_grid(input: &str) -> Result<Grid<Option<u8>>, InputError> {
    let rows = lines(input)
        .into_iter()
        .map(|l| {
            l.chars()
                .map(|c| c.to_digit(10).map(|d| d as u8))
                .collect()
        })
        .collect();
    Ok(Grid::new(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_drops_trailing_blank() {
        assert_eq!(lines("a\r\nb\n\n"), vec!["a", "b"]);
        assert!(lines("").is_empty());
    }

    #[test]
    fn test_split_ints_whitespace() {
        let rows: Vec<Vec<i64>> = split_ints("3   4\n-1 2\n", " ").unwrap();
        assert_eq!(rows, vec![vec![3, 4], vec![-1, 2]]);
    }

    #[test]
    fn test_split_ints_comma() {
        let rows: Vec<Vec<u32>> = split_ints("75,47,61\n97,13\n", ",").unwrap();
        assert_eq!(rows, vec![vec![75, 47, 61], vec![97, 13]]);
    }

    #[test]
    fn test_invalid_int_reports_line() {
        let err = int_lines::<u32>("1\n2\nx\n").unwrap_err();
        assert!(matches!(err, InputError::InvalidInt { line: 3, .. }));
    }

    #[test]
    fn test_single_int_line_rejects_multiple() {
        assert_eq!(single_int_line::<u64>("125 17\n", " ").unwrap(), vec![125, 17]);
        assert!(matches!(
            single_int_line::<u64>("1\n2\n", " "),
            Err(InputError::LineCount { found: 2, .. })
        ));
    }

    #[test]
    fn test_paragraphs() {
        let blocks = paragraphs("a\nb\n\n\nc\n");
        assert_eq!(blocks, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_markers_replaced() {
        let (grid, s, e) = char_grid_with_markers("S.#\n..E\n", 'S', 'E', '.').unwrap();
        assert_eq!(s, Point::new(0, 0));
        assert_eq!(e, Point::new(2, 1));
        assert_eq!(grid[s], '.');
        assert_eq!(grid[e], '.');
    }

    #[test]
    fn test_missing_marker() {
        assert_eq!(
            char_grid_with_marker("...\n", '^', '.').unwrap_err(),
            InputError::MissingMarker('^')
        );
    }

    #[test]
    fn test_digit_grid() {
        let g = digit_grid("0.\n98\n").unwrap();
        assert_eq!(g[Point::new(0, 0)], Some(0));
        assert_eq!(g[Point::new(1, 0)], None);
        assert_eq!(g[Point::new(0, 1)], Some(9));
    }

    #[test]
    fn test_ragged_grid_error() {
        assert!(matches!(char_grid("ab\nc\n"), Err(InputError::Grid(_))));
    }
}
