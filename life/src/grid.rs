// grid.rs - Sparse live-cell set for an unbounded Life plane

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::trace;

use crate::Cell;

type Column = BTreeSet<i64>;

/// One generation: the set of live cells, indexed column-first (x, then y).
///
/// A `Grid` is a value. Edits return a new grid and never touch the one they
/// were called on, so a caller may keep older generations around freely.
/// Columns sit behind `Arc`, so an edit copies the column index and the one
/// column it touches; every other column is shared with the predecessor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    // Invariant: no column is ever empty.
    columns: BTreeMap<i64, Arc<Column>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.columns
            .get(&cell.x)
            .is_some_and(|column| column.contains(&cell.y))
    }

    /// Returns a grid equal to `self` except that `cell` is forced to `alive`.
    pub fn set_cell(&self, cell: Cell, alive: bool) -> Grid {
        if self.is_alive(cell) == alive {
            return self.clone();
        }

        let mut columns = self.columns.clone();
        if alive {
            Arc::make_mut(columns.entry(cell.x).or_default()).insert(cell.y);
        } else if let Some(column) = columns.get_mut(&cell.x) {
            let column = Arc::make_mut(column);
            column.remove(&cell.y);
            if column.is_empty() {
                columns.remove(&cell.x);
            }
        }

        trace!(%cell, alive, "cell set");
        Grid { columns }
    }

    /// Flips the state of `cell`.
    pub fn toggle(&self, cell: Cell) -> Grid {
        self.set_cell(cell, !self.is_alive(cell))
    }

    /// Occupied columns in ascending `x`, each with its live `y`s ascending.
    pub fn rows(&self) -> impl Iterator<Item = (i64, impl Iterator<Item = i64> + '_)> + '_ {
        self.columns
            .iter()
            .map(|(&x, column)| (x, column.iter().copied()))
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.columns
            .iter()
            .flat_map(|(&x, column)| column.iter().map(move |&y| Cell::new(x, y)))
    }

    /// Number of live cells.
    pub fn len(&self) -> usize {
        self.columns.values().map(|column| column.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Smallest and largest corner (inclusive) enclosing every live cell.
    pub fn bounding_box(&self) -> Option<(Cell, Cell)> {
        let (&min_x, _) = self.columns.first_key_value()?;
        let (&max_x, _) = self.columns.last_key_value()?;
        let mut min_y = i64::MAX;
        let mut max_y = i64::MIN;
        for column in self.columns.values() {
            // Columns are non-empty and sorted.
            if let (Some(&lo), Some(&hi)) = (column.first(), column.last()) {
                min_y = min_y.min(lo);
                max_y = max_y.max(hi);
            }
        }
        Some((Cell::new(min_x, min_y), Cell::new(max_x, max_y)))
    }
}

impl FromIterator<Cell> for Grid {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut columns: BTreeMap<i64, Column> = BTreeMap::new();
        for cell in iter {
            columns.entry(cell.x).or_default().insert(cell.y);
        }
        Grid {
            columns: columns
                .into_iter()
                .map(|(x, column)| (x, Arc::new(column)))
                .collect(),
        }
    }
}
