//! Shared containers for the Advent of Code solvers
//!
//! Every daily solver builds on the same handful of small data structures:
//!
//! - [`Point`] and [`Direction`]: integer coordinates on a grid where `y` grows downward
//! - [`Grid`]: a rectangular, bounds-checked container over any cell type
//! - [`Set`]: an unordered collection with union/difference/pop helpers
//! - [`Stack`]: LIFO over a growable vector
//! - [`FifoQueue`]: a fixed-capacity ring buffer usable as a sliding-window key
//! - [`PriorityQueue`]: a binary heap with handle-based decrease-key
//! - [`combinations`]: lexicographic r-combinations of a slice
//!
//! The [`input`] module holds the line/paragraph/grid readers used by the
//! solvers' parse step.
//!
//! # Quick Example
//!
//! ```
//! use aoc_shared::{Grid, Point};
//!
//! let mut grid = Grid::filled(2, 2, '.');
//! grid[Point::new(0, 0)] = '#';
//!
//! let mut copy = grid.clone();
//! copy[Point::new(1, 1)] = '#';
//!
//! assert_eq!(grid[Point::new(1, 1)], '.');
//! assert_eq!(grid[Point::new(0, 0)], '#');
//!
//! grid[Point::new(1, 0)] = '#';
//! assert_eq!(copy[Point::new(1, 0)], '.');
//! ```

mod combinations;
mod fifo;
mod grid;
mod point;
mod priority_queue;
mod set;
mod stack;

pub mod input;

pub use combinations::{Combinations, combinations};
pub use fifo::FifoQueue;
pub use grid::{Grid, GridError};
pub use point::{Direction, Point};
pub use priority_queue::{Entry, EntryHandle, HeapOrder, PriorityQueue};
pub use set::{Set, unique};
pub use stack::Stack;
