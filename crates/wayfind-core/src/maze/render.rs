//! Writes a found path back into the maze text

use std::collections::HashSet;

use crate::maze::adapter::cell_key;
use crate::maze::grid::Grid;

/// Character substituted for every cell on the path
pub const PATH_MARKER: char = 'o';

/// Render the maze with path cells replaced by [`PATH_MARKER`].
///
/// Only cells within each row's ORIGINAL length are emitted; padding never
/// appears in the output. The trailing newline is reproduced only if the
/// input had one.
pub fn render(grid: &Grid, path_cells: &HashSet<String>) -> String {
    let mut out = String::with_capacity(grid.lines().iter().map(|l| l.len() + 1).sum());

    for (r, line) in grid.lines().iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            if path_cells.contains(&cell_key(r, c)) {
                out.push(PATH_MARKER);
            } else {
                out.push(ch);
            }
        }
        out.push('\n');
    }

    if !grid.had_trailing_newline() && out.ends_with('\n') {
        out.pop();
    }

    out
}
