//! Minimal path sums through square grids of non-negative weights
//!
//! A walk starts on the top-left cell, moves left, right, up, or down, and
//! pays the weight of every cell it visits, the start cell included. The
//! solvers in [`grid_algos`] find a walk to the bottom-right corner with
//! the smallest possible total and return it as a sum plus the sequence of
//! moves that produces it.

pub mod errors;
pub mod grid;
pub mod grid_algos;

pub use errors::{GridError, SolveError, SourceError};
pub use grid::{Cell, Direction, Grid};
pub use grid_algos::MinimalPath;
