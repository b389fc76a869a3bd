// engine.rs - Generation transition (B3/S23) over a sparse grid

use std::collections::HashSet;

use tracing::debug;

use crate::neighbours::{dead_neighbours, live_neighbour_count};
use crate::{Cell, Grid};

/// Computes the generation following `grid`.
///
/// Only live cells and their dead neighbours can be alive next generation,
/// so those are the only cells examined. A dead cell bordering several live
/// cells is counted once: after its first evaluation it goes into `evaluated`
/// and later encounters skip it. Every count is taken against the input
/// grid, so the visiting order never changes the outcome.
pub fn tick(grid: &Grid) -> Grid {
    let mut next: Vec<Cell> = Vec::with_capacity(grid.len());
    let mut evaluated: HashSet<Cell> = HashSet::new();
    let mut survived = 0usize;
    let mut born = 0usize;
    let mut cache_hits = 0usize;

    for cell in grid.cells() {
        if matches!(live_neighbour_count(grid, cell), 2 | 3) {
            next.push(cell);
            survived += 1;
        }

        for dead in dead_neighbours(grid, cell) {
            if !evaluated.insert(dead) {
                cache_hits += 1;
                continue;
            }
            if live_neighbour_count(grid, dead) == 3 {
                next.push(dead);
                born += 1;
            }
        }
    }

    debug!(
        population = grid.len(),
        survived,
        born,
        evaluated = evaluated.len(),
        cache_hits,
        "tick"
    );

    next.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cells: &[(i64, i64)]) -> Grid {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(tick(&Grid::new()), Grid::new());
    }

    #[test]
    fn lone_cell_dies() {
        assert!(tick(&grid(&[(3, 3)])).is_empty());
    }

    #[test]
    fn block_is_still_life() {
        let block = grid(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(tick(&block), block);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = grid(&[(0, 0), (1, 0), (2, 0)]);
        let vertical = grid(&[(1, -1), (1, 0), (1, 1)]);
        assert_eq!(tick(&horizontal), vertical);
        assert_eq!(tick(&vertical), horizontal);
    }

    #[test]
    fn birth_needs_exactly_three() {
        // (1, 1) has three live neighbours in an L-tromino
        let g = grid(&[(0, 0), (1, 0), (0, 1)]);
        assert!(tick(&g).is_alive(Cell::new(1, 1)));

        // two neighbours: no birth
        let g = grid(&[(0, 0), (2, 0)]);
        assert!(!tick(&g).is_alive(Cell::new(1, 1)));

        // four neighbours: no birth
        let g = grid(&[(0, 0), (2, 0), (0, 2), (2, 2)]);
        assert!(!tick(&g).is_alive(Cell::new(1, 1)));
    }

    #[test]
    fn survival_needs_two_or_three() {
        // centre with one neighbour dies
        let g = grid(&[(0, 0), (1, 0)]);
        assert!(!tick(&g).is_alive(Cell::new(0, 0)));

        // centre with two neighbours survives
        let g = grid(&[(-1, 0), (0, 0), (1, 0)]);
        assert!(tick(&g).is_alive(Cell::new(0, 0)));

        // centre with four neighbours dies
        let g = grid(&[(0, 0), (-1, -1), (1, -1), (-1, 1), (1, 1)]);
        assert!(!tick(&g).is_alive(Cell::new(0, 0)));
    }

    #[test]
    fn input_grid_is_not_modified() {
        let g = grid(&[(0, 0), (1, 0), (2, 0)]);
        let copy = g.clone();
        let _ = tick(&g);
        assert_eq!(g, copy);
    }
}
