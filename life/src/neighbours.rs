// neighbours.rs - Moore neighbourhood enumeration and live-neighbour counting

use crate::{Cell, Grid};

// Fixed order: top row left to right, then the middle pair, then the bottom row.
#[rustfmt::skip]
const OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// The eight cells surrounding `cell`, excluding `cell` itself.
pub fn neighbours_of(cell: Cell) -> [Cell; 8] {
    OFFSETS.map(|(dx, dy)| cell.offset(dx, dy))
}

/// Number of live cells in the Moore neighbourhood of `cell`, in `0..=8`.
pub fn live_neighbour_count(grid: &Grid, cell: Cell) -> usize {
    neighbours_of(cell)
        .into_iter()
        .filter(|&n| grid.is_alive(n))
        .count()
}

/// The neighbours of `cell` that are dead in `grid`.
///
/// Adjacent live cells share dead neighbours, so repeated calls will report
/// the same cell more than once. Deduplication is left to the caller.
pub fn dead_neighbours(grid: &Grid, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
    neighbours_of(cell)
        .into_iter()
        .filter(move |&n| !grid.is_alive(n))
}
