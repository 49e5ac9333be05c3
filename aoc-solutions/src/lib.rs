//! Advent of Code 2024 puzzle solutions with automatic registration
//!
//! Every `year_2024::day_N::Solver` derives `AutoRegisterSolver`, so linking this
//! crate is enough for `SolverRegistryBuilder::register_all_plugins` to see all
//! 25 days.

pub mod year_2024;
