// viewport.rs - Rectangular window onto the unbounded plane

use std::ops::Range;

use crate::Cell;

/// A `width` x `height` window centred on `center`.
///
/// For odd sizes the window extends one cell further on the high side:
/// `x` spans `center.x - width/2 .. center.x + ceil(width/2)`, and the same
/// for `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub center: Cell,
}

impl Viewport {
    pub const fn new(width: u32, height: u32, center: Cell) -> Self {
        Self { width, height, center }
    }

    pub fn x_range(&self) -> Range<i64> {
        span(self.center.x, self.width)
    }

    pub fn y_range(&self) -> Range<i64> {
        span(self.center.y, self.height)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.x_range().contains(&cell.x) && self.y_range().contains(&cell.y)
    }

    /// Plane cell under window position (`column`, `row`), both counted from
    /// the top-left corner. `None` when the position falls outside the window.
    pub fn cell_at(&self, column: u32, row: u32) -> Option<Cell> {
        if column >= self.width || row >= self.height {
            return None;
        }
        Some(Cell::new(
            self.x_range().start.saturating_add(i64::from(column)),
            self.y_range().start.saturating_add(i64::from(row)),
        ))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(20, 18, Cell::ORIGIN)
    }
}

fn span(center: i64, size: u32) -> Range<i64> {
    let size = i64::from(size);
    let below = size / 2;
    let above = size - below;
    center.saturating_sub(below)..center.saturating_add(above)
}
