//! Breadth-first search over the graph store
//!
//! One queue loop serves both query styles: `parent_map` traverses the
//! whole reachable component, `search_until` stops at the first dequeued
//! vertex satisfying a goal predicate. Both record parents at first
//! discovery only, so the parent map encodes shortest unweighted paths.

mod path;

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::error::{Result, WayfindError};
use crate::graph::store::Graph;

pub use path::reconstruct;

/// Maps each visited vertex to the vertex that first discovered it.
///
/// The start vertex has no entry. Scoped to a single traversal.
pub type ParentMap = HashMap<String, String>;

/// Serializable summary of a shortest-path query
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    /// Edge count of the path (0 when not found or from == to)
    pub length: usize,
    pub path: Vec<String>,
}

impl PathResult {
    pub fn new(from: &str, to: &str, path: Option<Vec<String>>) -> Self {
        let path = path.unwrap_or_default();
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            found: !path.is_empty(),
            length: path.len().saturating_sub(1),
            path,
        }
    }
}

/// Traverse from `start`, stopping at the first dequeued vertex other than
/// the start for which `goal` returns true.
///
/// Returns that vertex (if any) together with the parent map accumulated
/// so far. Ties between equidistant goal vertices resolve by discovery
/// order: neighbor insertion order within a vertex, FIFO order across the
/// queue.
#[tracing::instrument(skip(graph, goal), fields(start = %start, vertices = graph.len()))]
pub fn search_until<F>(graph: &Graph, start: &str, goal: F) -> Result<(Option<String>, ParentMap)>
where
    F: Fn(&str) -> bool,
{
    if !graph.contains(start) {
        return Err(WayfindError::VertexNotFound {
            key: start.to_string(),
        });
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut parents = ParentMap::new();
    let mut queue: VecDeque<String> = VecDeque::new();

    visited.insert(start.to_string());
    queue.push_back(start.to_string());

    while let Some(current) = queue.pop_front() {
        if current != start && goal(&current) {
            tracing::debug!(dest = %current, visited = visited.len(), "goal reached");
            return Ok((Some(current), parents));
        }

        let Some(neighbors) = graph.neighbors(&current) else {
            continue;
        };
        for next in neighbors {
            if visited.contains(next) {
                continue;
            }
            visited.insert(next.clone());
            parents.insert(next.clone(), current.clone());
            queue.push_back(next.clone());
        }
    }

    tracing::debug!(visited = visited.len(), "traversal exhausted");
    Ok((None, parents))
}

/// Full BFS traversal of the component reachable from `start`
pub fn parent_map(graph: &Graph, start: &str) -> Result<ParentMap> {
    search_until(graph, start, |_| false).map(|(_, parents)| parents)
}

/// Shortest unweighted path from `from` to `to`.
///
/// Errors if either key is absent; `Ok(None)` when `to` is unreachable.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn shortest_path(graph: &Graph, from: &str, to: &str) -> Result<Option<Vec<String>>> {
    if !graph.contains(to) {
        return Err(WayfindError::VertexNotFound { key: to.to_string() });
    }

    let parents = parent_map(graph, from)?;
    Ok(path::reconstruct(from, to, &parents))
}
