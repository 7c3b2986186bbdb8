use crate::errors::SolveError;
use crate::grid::{Cell, Direction};
use super::GridNodeMap;

/// Rebuild the move sequence from a table of predecessor directions
/// `prev` is a row-major table with side `n`; each entry is the move from a
/// cell toward the predecessor on its best known path, unset only for the
/// start cell
/// Walks backwards from the bottom-right corner and stops at the origin
/// itself, so routes hugging the top row or the left column come back whole
pub(crate) fn direction_backtrack(
    prev: &[Option<Direction>],
    n: usize,
) -> Result<Vec<Direction>, SolveError> {
    let mut steps = Vec::new();
    let mut cell = Cell { row: n - 1, col: n - 1 };

    while cell != Cell::ORIGIN {
        // A missing entry before the origin means the table never covered
        // the target
        let Some(toward) = prev[cell.row * n + cell.col] else {
            return Err(SolveError::NoPathFound);
        };

        // The forward move is the reverse of the pointer being followed
        steps.push(toward.opposite());

        match cell.step(toward, n) {
            Some(previous) => cell = previous,
            None => return Err(SolveError::NoPathFound),
        }
    }

    // The moves were collected goal-to-start, so flip them
    steps.reverse();

    Ok(steps)
}


/// Construct the route of cells from the start cell to the goal
/// Returns the ordered cells by tracing parent indices back through the map
/// cell_map: GridNodeMap<C> - visited cells with their (parent_index, sum)
/// goal_index: usize - index of the goal cell in the map
pub(crate) fn cell_trace<C>(
    cell_map: &GridNodeMap<C>,
    goal_index: usize,
) -> Result<Vec<Cell>, SolveError> {
    let mut route = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != usize::MAX {
        if let Some((&cell, &(parent_index, _))) = cell_map.get_index(current_index) {
            route.push(cell);
            current_index = parent_index;
        } else {
            return Err(SolveError::NoPathFound);
        }
    }

    // The route came out goal-first, so reverse it
    route.reverse();

    if route.is_empty() {
        return Err(SolveError::NoPathFound);
    }

    Ok(route)
}


/// The moves between consecutive cells of a route
/// Fails if any pair is not grid-adjacent
pub(crate) fn steps_between(route: &[Cell]) -> Result<Vec<Direction>, SolveError> {
    route
        .windows(2)
        .map(|pair| Direction::between(pair[0], pair[1]).ok_or(SolveError::NoPathFound))
        .collect()
}
