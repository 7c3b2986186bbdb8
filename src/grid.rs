use crate::errors::{GridError, SourceError};

use std::{fmt, fs, path::Path, str::FromStr};
use num_traits::Zero;


/// A single grid-adjacent move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Every direction, in the enumeration order the solvers use to break ties
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The reverse move
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The move leading from one cell to another, if they are grid-adjacent
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        let row_delta = to.row as isize - from.row as isize;
        let col_delta = to.col as isize - from.col as isize;

        match (row_delta, col_delta) {
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Single-letter direction labels, as printed next to a path sum
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            Direction::Left => "L",
            Direction::Right => "R",
            Direction::Up => "U",
            Direction::Down => "D",
        };
        write!(f, "{}", letter)
    }
}


/// Coordinate of one cell - row 0 is the top row, column 0 the left column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// The top-left corner, where every walk starts
    pub const ORIGIN: Cell = Cell { row: 0, col: 0 };

    /// The adjacent cell one move away, if it stays inside an `n` by `n` grid
    pub fn step(self, dir: Direction, n: usize) -> Option<Cell> {
        let (row, col) = match dir {
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col + 1),
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row + 1, self.col),
        };

        if row < n && col < n {
            Some(Cell { row, col })
        } else {
            None
        }
    }
}


/// An immutable square matrix of non-negative cell weights
/// Weights are stored row-major; the invariant that every row has length
/// `n` with `n >= 1` and no weight is negative is enforced at construction,
/// so the solvers never re-validate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<C> {
    weights: Vec<C>,
    n: usize,
}

impl<C> Grid<C>
where
    C: Zero + Ord + Copy,
{
    /// Build a grid from rows of weights
    /// Fails unless the rows form a square with at least one cell and
    /// every weight is non-negative
    pub fn from_rows(rows: Vec<Vec<C>>) -> Result<Self, GridError> {
        let n = rows.len();
        if n == 0 {
            return Err(GridError::Empty);
        }

        let mut weights = Vec::with_capacity(n * n);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(GridError::NotSquare { row: r, len: row.len(), rows: n });
            }
            for (c, weight) in row.into_iter().enumerate() {
                if weight < C::zero() {
                    return Err(GridError::NegativeWeight { row: r, col: c });
                }
                weights.push(weight);
            }
        }

        Ok(Self { weights, n })
    }

    /// Read a grid from a file of comma-separated rows
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError>
    where
        C: FromStr,
    {
        fs::read_to_string(path)?.parse()
    }

    /// Side length of the grid
    pub fn n(&self) -> usize {
        self.n
    }

    /// Weight of one cell - the cell must lie inside the grid
    pub fn weight(&self, cell: Cell) -> C {
        self.weights[self.index(cell)]
    }

    /// Row-major position of a cell, shared with the solvers' flat tables
    pub(crate) fn index(&self, cell: Cell) -> usize {
        cell.row * self.n + cell.col
    }

    /// The bottom-right corner, where every walk ends
    pub fn target(&self) -> Cell {
        Cell { row: self.n - 1, col: self.n - 1 }
    }

    /// In-bounds neighbors of a cell with their weights, in tie-breaking order
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = (Cell, C)> + '_ {
        let n = self.n;
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| cell.step(dir, n))
            .map(move |neighbor| (neighbor, self.weight(neighbor)))
    }

    /// Follow `steps` from the top-left cell, totalling every visited weight
    /// The start cell is counted once and revisits are counted per visit
    /// Returns the landing cell with the total, or None if a step leaves the grid
    pub fn walk(&self, steps: &[Direction]) -> Option<(Cell, C)> {
        let mut cell = Cell::ORIGIN;
        let mut total = self.weight(cell);

        for &dir in steps {
            cell = cell.step(dir, self.n)?;
            total = total + self.weight(cell);
        }

        Some((cell, total))
    }
}

impl<C> FromStr for Grid<C>
where
    C: Zero + Ord + Copy + FromStr,
{
    type Err = SourceError;

    /// One row per line, weights separated by commas
    fn from_str(s: &str) -> Result<Self, SourceError> {
        let mut rows = Vec::new();

        for (i, line) in s.lines().enumerate() {
            let mut row = Vec::new();
            for token in line.split(',') {
                let token = token.trim();
                let weight = token.parse().map_err(|_| SourceError::BadToken {
                    line: i + 1,
                    token: token.to_string(),
                })?;
                row.push(weight);
            }
            rows.push(row);
        }

        Ok(Grid::from_rows(rows)?)
    }
}
