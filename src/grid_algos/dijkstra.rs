use crate::errors::SolveError;
use crate::grid::{Cell, Grid};
use super::{GridNodeMap, MinimalPath};
use super::backtrack::{cell_trace, steps_between};

use std::{collections::BinaryHeap, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};




/// Identify the minimal path sum using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// A priority queue keyed on the running sum replaces the FIFO recheck queue
/// of the label-correcting solver, which is valid because weights are never
/// negative - each cell settles the first time it leaves the queue
pub fn dijkstra<C>(grid: &Grid<C>) -> Result<MinimalPath<C>, SolveError>
where
    C: Zero + Ord + Copy + Debug,
{
    let target = grid.target();

    // Cells to visit - the binary heap hands back the smallest sum first
    let mut to_visit: BinaryHeap<CellId<C>> = BinaryHeap::new();

    // Visited cells with their best sums
    // The tuple contains (parent_index, sum) where parent_index is the index
    // of the predecessor cell in the map; the start cell gets usize::MAX to
    // mark that it has no predecessor
    let mut cell_map: GridNodeMap<C> = GridNodeMap::default();

    // A walk pays for the cell it starts on
    let start_sum = grid.weight(Cell::ORIGIN);
    let start_index = cell_map.insert_full(Cell::ORIGIN, (usize::MAX, start_sum)).0;
    to_visit.push(CellId {
        index: start_index,
        sum: start_sum,
    });

    while let Some(CellId { sum, index }) = to_visit.pop() {

        // fetch the current best sum for the cell
        let (&cell, &(_, best)) = cell_map.get_index(index).unwrap();

        // A stale queue entry - some cheaper route to this cell was already
        // expanded, so there is nothing left to do with this one
        if sum > best {
            continue;
        }

        // The smallest sum in the queue belongs to the target: done
        if cell == target {
            let route = cell_trace(&cell_map, index)?;
            let steps = steps_between(&route)?;
            return Ok(MinimalPath { sum: best, steps });
        }

        // loop over neighbors - entering a cell always pays that cell's weight
        for (neighbor, weight) in grid.neighbors(cell) {

            let new_sum = best + weight;

            // Check if this is a better route to the neighbor
            let neighbor_index;

            match cell_map.entry(neighbor) {
                Vacant(e) => {
                    // First time this cell is reached
                    neighbor_index = e.index();
                    e.insert((index, new_sum));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_sum {
                        neighbor_index = e.index();
                        e.insert((index, new_sum));
                    } else {
                        // The recorded route is at least as good, do nothing
                        continue;
                    }
                }
            }

            // Only queue the neighbor when its route improved
            to_visit.push(CellId {
                index: neighbor_index,
                sum: new_sum,
            });
        }
    }

    // Unreachable for a valid grid, every cell connects to the origin
    Err(SolveError::NoPathFound)
}


/// Queue entry
/// - ordering only needs the sum and a way back to the cell
/// - reversed so the binary heap pops the smallest sum first
#[derive(Debug)]
struct CellId<C> {
    index: usize,
    sum: C,
}

impl<C: Ord> Ord for CellId<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.sum.cmp(&self.sum)
    }
}
impl<C: Ord> PartialOrd for CellId<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialEq> PartialEq for CellId<C> {
    fn eq(&self, other: &Self) -> bool {
        self.sum == other.sum
    }
}
impl<C: PartialEq> Eq for CellId<C> {}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction::{Down, Right};

    fn grid_of(rows: Vec<Vec<u64>>) -> Grid<u64> {
        Grid::from_rows(rows).unwrap()
    }

    // The 5x5 example matrix from Euler problem 83
    fn euler_grid() -> Grid<u64> {
        grid_of(vec![
            vec![131, 673, 234, 103, 18],
            vec![201, 96, 342, 965, 150],
            vec![630, 803, 746, 422, 111],
            vec![537, 699, 497, 121, 956],
            vec![805, 732, 524, 37, 331],
        ])
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = grid_of(vec![vec![5]]);

        let found = dijkstra(&grid).unwrap();

        assert_eq!(found.sum, 5);
        assert!(found.steps.is_empty());
    }

    #[test]
    fn test_two_by_two_takes_the_cheap_corner() {
        let grid = grid_of(vec![vec![1, 2], vec![4, 1]]);

        let found = dijkstra(&grid).unwrap();

        assert_eq!(found.sum, 4);
        assert_eq!(found.steps, vec![Right, Down]);
    }

    #[test]
    fn test_euler_example_matrix() {
        let grid = euler_grid();

        let found = dijkstra(&grid).unwrap();
        assert_eq!(found.sum, 2297);

        // The moves must replay to the bottom-right corner for the same total
        let (end, total) = grid.walk(&found.steps).unwrap();
        assert_eq!(end, grid.target());
        assert_eq!(total, 2297);
    }

    #[test]
    fn test_path_along_top_row_is_complete() {
        let grid = grid_of(vec![
            vec![1, 1, 1],
            vec![9, 9, 1],
            vec![9, 9, 1],
        ]);

        let found = dijkstra(&grid).unwrap();

        assert_eq!(found.sum, 5);
        assert_eq!(found.steps, vec![Right, Right, Down, Down]);
    }

    #[test]
    fn test_repeated_solves_are_identical() {
        let grid = euler_grid();

        let first = dijkstra(&grid).unwrap();
        let second = dijkstra(&grid).unwrap();

        assert_eq!(first, second);
    }
}
