// ascii.rs - Plain-text viewport format: rows of '.' and '*'

use tracing::trace;

use crate::{Cell, Grid, Viewport};

pub const LIVE: char = '*';
pub const DEAD: char = '.';

/// Reads a block of text into a grid centred on the block's middle.
///
/// One leading and one trailing newline are dropped, then each line is a row.
/// The centre is `(width / 2, height / 2)` of the block, where `width` is the
/// longest row. Only `*` is alive; every other character is dead, as is
/// anything past the end of a short row. Never fails.
pub fn parse(text: &str) -> Grid {
    let text = text.strip_prefix('\n').unwrap_or(text);
    let text = text.strip_suffix('\n').unwrap_or(text);

    let rows: Vec<&str> = text.split('\n').collect();
    let height = rows.len() as i64;
    let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0) as i64;
    let center = Cell::new(width / 2, height / 2);

    let grid: Grid = rows
        .iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.chars()
                .enumerate()
                .filter(|&(_, ch)| ch == LIVE)
                .map(move |(x, _)| Cell::new(x as i64 - center.x, y as i64 - center.y))
        })
        .collect();

    trace!(width, height, population = grid.len(), "parsed ascii");
    grid
}

/// Draws the part of `grid` inside `viewport`, top row first.
///
/// Rows are joined by `\n` with no trailing newline. An empty window renders
/// as an empty string.
pub fn render(grid: &Grid, viewport: &Viewport) -> String {
    let xs = viewport.x_range();
    let ys = viewport.y_range();
    if xs.is_empty() || ys.is_empty() {
        return String::new();
    }

    let width = viewport.width as usize;
    let height = viewport.height as usize;
    let mut out = String::with_capacity(height * (width + 1));

    for y in ys.clone() {
        if y != ys.start {
            out.push('\n');
        }
        for x in xs.clone() {
            out.push(if grid.is_alive(Cell::new(x, y)) { LIVE } else { DEAD });
        }
    }
    out
}
