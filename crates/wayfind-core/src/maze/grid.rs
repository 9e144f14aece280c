//! Rectangular character grid parsed from maze text
//!
//! Ragged rows are tolerated: the grid is padded to the longest line with
//! a blank filler that counts as walkable, never as wall. The original
//! lines are kept alongside the padded cells so rendering can reproduce
//! the input's exact shape.

/// The wall character; everything else is an open cell
pub const WALL: char = '#';

#[derive(Debug)]
pub struct Grid {
    lines: Vec<String>,
    cells: Vec<Vec<char>>,
    rows: usize,
    cols: usize,
    trailing_newline: bool,
}

impl Grid {
    /// Parse a block of maze text.
    ///
    /// Splits on `\n`, dropping the one empty segment a trailing newline
    /// produces, so `"a\n"` is one row and `"a\n\n"` is two.
    pub fn parse(text: &str) -> Self {
        let trailing_newline = text.ends_with('\n');
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if trailing_newline {
            lines.pop();
        }

        let rows = lines.len();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut cells = vec![vec![' '; cols]; rows];
        for (r, line) in lines.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                cells[r][c] = ch;
            }
        }

        Grid {
            lines,
            cells,
            rows,
            cols,
            trailing_newline,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell character at (row, col) in the padded grid
    pub fn cell(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] != WALL
    }

    /// True for cells on the outer edge of the padded grid
    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        row == 0 || row == self.rows - 1 || col == 0 || col == self.cols - 1
    }

    /// First open boundary cell scanning rows top-to-bottom, columns
    /// left-to-right; `None` when every boundary cell is a wall.
    pub fn entrance(&self) -> Option<(usize, usize)> {
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.is_boundary(r, c) && self.is_open(r, c) {
                    return Some((r, c));
                }
            }
        }
        None
    }

    /// The original input lines, unpadded
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn had_trailing_newline(&self) -> bool {
        self.trailing_newline
    }
}
