//! Text-maze solving
//!
//! A maze is a block of text where `#` is a wall and any other character
//! is an open cell. Open cells become graph vertices, 4-orthogonal
//! adjacency becomes edges, and a breadth-first search runs from the first
//! open boundary cell to the first other boundary cell it reaches. The
//! found path is written back into the text as `o` characters; mazes with
//! no boundary-to-boundary route come back unchanged.

pub mod adapter;
pub mod grid;
pub mod render;
pub mod solve;

pub use adapter::{build_graph, cell_key, key_coords};
pub use grid::{Grid, WALL};
pub use render::{render, PATH_MARKER};
pub use solve::{solve, solve_detailed, MazeSolution};
