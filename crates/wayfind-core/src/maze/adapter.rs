//! Converts a maze grid into a graph: vertex per open cell, directed
//! edges to in-bounds open orthogonal neighbors

use crate::error::Result;
use crate::graph::Graph;
use crate::maze::grid::Grid;

/// Neighbor probe order: up, down, left, right. BFS tie-breaking depends
/// on this order; do not reorder.
const PROBES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Vertex key for the cell at (row, col)
pub fn cell_key(row: usize, col: usize) -> String {
    format!("{row},{col}")
}

/// Inverse of [`cell_key`]
pub fn key_coords(key: &str) -> Option<(usize, usize)> {
    let (row, col) = key.split_once(',')?;
    Some((row.parse().ok()?, col.parse().ok()?))
}

/// Build the cell graph for `grid`.
///
/// Vertices are created in row-major order; every open cell gets an
/// independent directed edge to each in-bounds open neighbor (both sides
/// add their own edge, so adjacency is symmetric in effect).
pub fn build_graph(grid: &Grid) -> Result<Graph> {
    let mut graph = Graph::new();

    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            if grid.is_open(r, c) {
                graph.add_vertex(cell_key(r, c), Some(grid.cell(r, c)))?;
            }
        }
    }

    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            if !grid.is_open(r, c) {
                continue;
            }
            for (dr, dc) in PROBES {
                let (nr, nc) = (r as isize + dr, c as isize + dc);
                if nr < 0 || nc < 0 {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if nr >= grid.rows() || nc >= grid.cols() || !grid.is_open(nr, nc) {
                    continue;
                }
                graph.add_directed_edge(&cell_key(r, c), &cell_key(nr, nc))?;
            }
        }
    }

    Ok(graph)
}
