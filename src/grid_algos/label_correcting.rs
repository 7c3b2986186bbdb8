use crate::errors::SolveError;
use crate::grid::{Cell, Direction, Grid};
use super::MinimalPath;
use super::backtrack::direction_backtrack;

use std::{collections::VecDeque, fmt::Debug};
use num_traits::Zero;




/// Identify the minimal path sum using label-correcting relaxation
/// https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm
/// Cells are rechecked from a FIFO queue until no sum estimate can improve
/// anywhere, then the moves are read back out of the predecessor table
pub fn label_correcting<C>(grid: &Grid<C>) -> Result<MinimalPath<C>, SolveError>
where
    C: Zero + Ord + Copy + Debug,
{
    let n = grid.n();

    // Best known path sum ending at each cell - None until some walk reaches it
    // Once set, a sum only ever decreases
    let mut sums: Vec<Option<C>> = vec![None; n * n];
    sums[grid.index(Cell::ORIGIN)] = Some(grid.weight(Cell::ORIGIN));

    // Move from each cell toward the predecessor on its best known path
    // The start cell never gets one
    let mut prev: Vec<Option<Direction>> = vec![None; n * n];

    // Cells pending (re-)evaluation, seeded with the start cell's neighbors
    // Duplicates are harmless - a recheck without an improvement does nothing
    let mut queue: VecDeque<Cell> = Direction::ALL
        .into_iter()
        .filter_map(|dir| Cell::ORIGIN.step(dir, n))
        .collect();

    while let Some(cell) = queue.pop_front() {

        // Cheapest reached neighbor, tagged with the move from `cell` toward it
        // The first direction in enumeration order wins ties
        let mut best: Option<(Direction, C)> = None;
        for toward in Direction::ALL {
            let Some(neighbor) = cell.step(toward, n) else {
                continue;
            };
            let Some(sum) = sums[grid.index(neighbor)] else {
                continue;
            };
            match best {
                Some((_, cheapest)) if cheapest <= sum => {}
                _ => best = Some((toward, sum)),
            }
        }

        // No neighbor has been reached yet - this cell comes back through the
        // queue once one of them is
        let Some((toward, via)) = best else {
            continue;
        };

        let candidate = via + grid.weight(cell);
        let index = grid.index(cell);
        let improved = match sums[index] {
            None => true,
            Some(current) => candidate < current,
        };

        if improved {
            sums[index] = Some(candidate);
            prev[index] = Some(toward);

            // A cheaper way into this cell may open cheaper ways into every
            // cell around it, so all of them are rechecked
            for dir in Direction::ALL {
                if let Some(neighbor) = cell.step(dir, n) {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    let Some(sum) = sums[grid.index(grid.target())] else {
        return Err(SolveError::NoPathFound);
    };
    let steps = direction_backtrack(&prev, n)?;

    Ok(MinimalPath { sum, steps })
}
