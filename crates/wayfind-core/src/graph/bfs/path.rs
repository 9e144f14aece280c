//! Path reconstruction by backward walk over parent links

use crate::graph::bfs::ParentMap;

/// Walk parent links from `dest` back to `start`, returning the path in
/// start-to-destination order.
///
/// `None` when `dest` was never visited (no entry chain back to `start`).
pub fn reconstruct(start: &str, dest: &str, parents: &ParentMap) -> Option<Vec<String>> {
    if dest == start {
        return Some(vec![start.to_string()]);
    }

    let mut path = vec![dest.to_string()];
    let mut current = dest;
    while current != start {
        current = parents.get(current)?;
        path.push(current.to_string());
    }
    path.reverse();
    Some(path)
}
