use std::fmt;
use std::ops::{Index, IndexMut};

use thiserror::Error;

use crate::Point;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Ragged grid: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Rectangular container addressed by [`Point`]; row `y`, column `x`.
///
/// Indexing with `grid[p]` panics outside the grid. Callers that may step off the
/// edge check [`Grid::contains`] first or use [`Grid::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    /// Builds a grid from rows, rejecting rows of unequal length.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: r.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Largest valid x coordinate; `-1` for an empty grid.
    pub fn max_x(&self) -> i64 {
        self.width() as i64 - 1
    }

    /// Largest valid y coordinate; `-1` for an empty grid.
    pub fn max_y(&self) -> i64 {
        self.height() as i64 - 1
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x <= self.max_x() && p.y <= self.max_y()
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        if self.contains(p) {
            Some(&self.rows[p.y as usize][p.x as usize])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        if self.contains(p) {
            Some(&mut self.rows[p.y as usize][p.x as usize])
        } else {
            None
        }
    }

    /// Overwrites the cell at `p`. Returns `false` when `p` is out of bounds.
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.get_mut(p) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vec<T>] {
        &mut self.rows
    }

    /// Every coordinate in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width() as i64;
        (0..self.height() as i64).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    /// Every `(point, cell)` pair in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Point::new(x as i64, y as i64), cell))
        })
    }

    /// First point (row-major) whose cell satisfies `pred`.
    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.cells().find(|(_, c)| pred(c)).map(|(p, _)| p)
    }

    /// In-bounds cardinal neighbours of `p`, in left/right/up/down order.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.cardinal_neighbors()
            .into_iter()
            .filter(move |n| self.contains(*n))
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(width: usize, height: usize, fill: T) -> Self {
        Self {
            rows: vec![vec![fill; width]; height],
        }
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        match self.get(p) {
            Some(cell) => cell,
            None => panic!(
                "point {p} outside {}x{} grid",
                self.width(),
                self.height()
            ),
        }
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        let (w, h) = (self.width(), self.height());
        match self.get_mut(p) {
            Some(cell) => cell,
            None => panic!("point {p} outside {w}x{h} grid"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<char> {
        Grid::new(vec![
            "ab".chars().collect(),
            "cd".chars().collect(),
            "ef".chars().collect(),
        ])
        .unwrap()
    }

    #[test]
    fn test_dimensions() {
        let g = sample();
        assert_eq!(g.width(), 2);
        assert_eq!(g.height(), 3);
        assert_eq!(g.max_x(), 1);
        assert_eq!(g.max_y(), 2);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::new(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_contains_edges() {
        let g = sample();
        assert!(g.contains(Point::new(0, 0)));
        assert!(g.contains(Point::new(1, 2)));
        assert!(!g.contains(Point::new(2, 0)));
        assert!(!g.contains(Point::new(0, 3)));
        assert!(!g.contains(Point::new(-1, 0)));
    }

    #[test]
    fn test_index_row_major() {
        let g = sample();
        assert_eq!(g[Point::new(1, 0)], 'b');
        assert_eq!(g[Point::new(0, 2)], 'e');
        assert_eq!(g.get(Point::new(5, 5)), None);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_index_out_of_bounds_panics() {
        let g = sample();
        let _ = g[Point::new(2, 2)];
    }

    #[test]
    fn test_clone_is_deep() {
        let mut g = sample();
        let mut copy = g.clone();
        copy[Point::new(0, 0)] = 'z';
        assert_eq!(g[Point::new(0, 0)], 'a');
        assert_eq!(copy[Point::new(0, 0)], 'z');

        g[Point::new(1, 2)] = 'y';
        assert!(g.set(Point::new(1, 0), 'x'));
        assert_eq!(copy[Point::new(1, 2)], 'f');
        assert_eq!(copy[Point::new(1, 0)], 'b');
    }

    #[test]
    fn test_neighbors_clipped() {
        let g = sample();
        let n: Vec<_> = g.neighbors(Point::new(0, 0)).collect();
        assert_eq!(n, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn test_position_and_display() {
        let g = sample();
        assert_eq!(g.position(|c| *c == 'd'), Some(Point::new(1, 1)));
        assert_eq!(g.to_string(), "ab\ncd\nef\n");
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut g = Grid::filled(2, 2, 0u8);
        assert!(g.set(Point::new(1, 1), 9));
        assert!(!g.set(Point::new(2, 1), 9));
        assert_eq!(g.cells().filter(|(_, c)| **c == 9).count(), 1);
    }
}
