
pub mod dijkstra;
pub mod label_correcting;
mod backtrack;

use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

use crate::grid::{Cell, Direction};

/// Type alias for the cell bookkeeping map used by the Dijkstra solver
/// IndexMap keeps entries addressable by insertion index, FxHasher keeps
/// the hashing fast
/// The tuple contains (parent_index, sum) where:
/// - parent_index is the index of the predecessor cell in the map
/// - sum is the smallest known path sum ending at this cell
pub type GridNodeMap<C> = IndexMap<Cell, (usize, C), BuildHasherDefault<FxHasher>>;

/// A minimal walk from the top-left to the bottom-right corner
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinimalPath<C> {
    /// Total weight of every cell the walk visits, both corners included
    pub sum: C,
    /// The moves that retrace the walk from the start cell
    pub steps: Vec<Direction>,
}


#[cfg(test)]
mod tests {
    use super::dijkstra::dijkstra;
    use super::label_correcting::label_correcting;
    use crate::grid::{Cell, Grid};

    // Right/down-only minimal path sum - the naive forward baseline
    fn forward_dp(grid: &Grid<u64>) -> u64 {
        let n = grid.n();
        let mut best = vec![0u64; n * n];

        for row in 0..n {
            for col in 0..n {
                let weight = grid.weight(Cell { row, col });
                let up = if row > 0 { Some(best[(row - 1) * n + col]) } else { None };
                let left = if col > 0 { Some(best[row * n + col - 1]) } else { None };
                best[row * n + col] = match (up, left) {
                    (None, None) => weight,
                    (Some(u), None) => u + weight,
                    (None, Some(l)) => l + weight,
                    (Some(u), Some(l)) => u.min(l) + weight,
                };
            }
        }

        best[n * n - 1]
    }

    fn random_grid(n: usize) -> Grid<u64> {
        let rows = (0..n)
            .map(|_| (0..n).map(|_| rand::random_range(0..10u64)).collect())
            .collect();
        Grid::from_rows(rows).unwrap()
    }

    // The 5x5 example matrix from Euler problem 83
    fn euler_grid() -> Grid<u64> {
        Grid::from_rows(vec![
            vec![131, 673, 234, 103, 18],
            vec![201, 96, 342, 965, 150],
            vec![630, 803, 746, 422, 111],
            vec![537, 699, 497, 121, 956],
            vec![805, 732, 524, 37, 331],
        ])
        .unwrap()
    }

    #[test]
    fn test_solvers_agree_on_random_grids() {
        for _ in 0..50 {
            let n = rand::random_range(1..=8);
            let grid = random_grid(n);

            let by_queue = label_correcting(&grid).unwrap();
            let by_heap = dijkstra(&grid).unwrap();

            assert_eq!(by_queue.sum, by_heap.sum, "solvers disagree on {:?}", grid);

            // Both step lists must replay to the target for exactly the sum
            for path in [&by_queue, &by_heap] {
                let (end, total) = grid.walk(&path.steps).unwrap();
                assert_eq!(end, grid.target());
                assert_eq!(total, path.sum);
            }
        }
    }

    #[test]
    fn test_sum_never_drops_below_the_two_corners() {
        for _ in 0..20 {
            let n = rand::random_range(2..=8);
            let grid = random_grid(n);

            let found = label_correcting(&grid).unwrap();
            let corners = grid.weight(Cell::ORIGIN) + grid.weight(grid.target());
            assert!(found.sum >= corners);
        }
    }

    #[test]
    fn test_forward_dp_is_an_upper_bound() {
        for _ in 0..20 {
            let n = rand::random_range(1..=8);
            let grid = random_grid(n);

            let found = label_correcting(&grid).unwrap();
            assert!(found.sum <= forward_dp(&grid));
        }
    }

    #[test]
    fn test_monotone_grid_matches_forward_dp() {
        // Weights strictly increase along both axes, so stepping up or left
        // can never pay off and the four-way optimum is a right/down path
        for n in 1..=8usize {
            let rows = (0..n)
                .map(|r| (0..n).map(|c| (r * n + c + 1) as u64).collect())
                .collect();
            let grid = Grid::from_rows(rows).unwrap();

            let expected = forward_dp(&grid);
            assert_eq!(label_correcting(&grid).unwrap().sum, expected);
            assert_eq!(dijkstra(&grid).unwrap().sum, expected);
        }
    }

    #[test]
    fn test_four_way_movement_beats_forward_dp_on_the_euler_grid() {
        let grid = euler_grid();

        // 2427 is the best any right/down-only path can do on this matrix
        assert_eq!(forward_dp(&grid), 2427);
        assert_eq!(label_correcting(&grid).unwrap().sum, 2297);
        assert_eq!(dijkstra(&grid).unwrap().sum, 2297);
    }

    #[test]
    fn test_raising_a_weight_never_lowers_the_sum() {
        for _ in 0..20 {
            let n = rand::random_range(1..=6);
            let grid = random_grid(n);
            let before = label_correcting(&grid).unwrap().sum;

            // Bump one random cell and solve again
            let bumped = Cell {
                row: rand::random_range(0..n),
                col: rand::random_range(0..n),
            };
            let rows = (0..n)
                .map(|row| {
                    (0..n)
                        .map(|col| {
                            let cell = Cell { row, col };
                            let extra = if cell == bumped { 100 } else { 0 };
                            grid.weight(cell) + extra
                        })
                        .collect()
                })
                .collect();
            let raised = Grid::from_rows(rows).unwrap();

            assert!(label_correcting(&raised).unwrap().sum >= before);
        }
    }
}
