//! Key-addressed vertex store with directed adjacency lists
//!
//! Vertices are owned by the [`Graph`] and addressed by string key;
//! adjacency lists hold keys rather than references, so an edge can never
//! dangle. Neighbor order is insertion order and is significant: BFS
//! tie-breaking follows it.

use std::collections::HashMap;

use crate::error::{Result, WayfindError};

/// A single vertex: key, optional payload, outgoing neighbor keys
#[derive(Debug, Clone)]
pub struct Vertex {
    key: String,
    payload: Option<char>,
    neighbors: Vec<String>,
}

impl Vertex {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Cell character for maze vertices, `None` for named vertices
    pub fn payload(&self) -> Option<char> {
        self.payload
    }

    /// Outgoing neighbor keys, in insertion order
    pub fn neighbors(&self) -> &[String] {
        &self.neighbors
    }
}

/// Mapping from key to vertex, with edge construction operations
///
/// Built once per query; never reused additively across independent
/// solve calls.
#[derive(Debug, Default)]
pub struct Graph {
    vertices: HashMap<String, Vertex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new vertex under `key`.
    ///
    /// Returns `DuplicateVertex` if the key is already present.
    pub fn add_vertex(&mut self, key: impl Into<String>, payload: Option<char>) -> Result<()> {
        let key = key.into();
        if self.vertices.contains_key(&key) {
            return Err(WayfindError::DuplicateVertex { key });
        }
        self.vertices.insert(
            key.clone(),
            Vertex {
                key,
                payload,
                neighbors: Vec::new(),
            },
        );
        Ok(())
    }

    /// Append `to` to `from`'s neighbor list.
    ///
    /// Both endpoints must already exist; returns `VertexNotFound`
    /// otherwise.
    pub fn add_directed_edge(&mut self, from: &str, to: &str) -> Result<()> {
        if !self.vertices.contains_key(to) {
            return Err(WayfindError::VertexNotFound { key: to.to_string() });
        }
        let vertex = self
            .vertices
            .get_mut(from)
            .ok_or_else(|| WayfindError::VertexNotFound {
                key: from.to_string(),
            })?;
        vertex.neighbors.push(to.to_string());
        Ok(())
    }

    /// Two directed edges: a→b then b→a
    pub fn add_undirected_edge(&mut self, a: &str, b: &str) -> Result<()> {
        self.add_directed_edge(a, b)?;
        self.add_directed_edge(b, a)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vertices.contains_key(key)
    }

    pub fn vertex(&self, key: &str) -> Option<&Vertex> {
        self.vertices.get(key)
    }

    /// Neighbor keys of `key`, or `None` if the vertex is absent
    pub fn neighbors(&self, key: &str) -> Option<&[String]> {
        self.vertices.get(key).map(|v| v.neighbors())
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_and_lookup() {
        let mut graph = Graph::new();
        graph.add_vertex("A", None).unwrap();
        graph.add_vertex("B", Some('b')).unwrap();

        assert_eq!(graph.len(), 2);
        assert!(graph.contains("A"));
        assert!(!graph.contains("C"));
        assert_eq!(graph.vertex("B").unwrap().payload(), Some('b'));
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let mut graph = Graph::new();
        graph.add_vertex("A", None).unwrap();

        let err = graph.add_vertex("A", None).unwrap_err();
        assert!(matches!(err, WayfindError::DuplicateVertex { key } if key == "A"));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_directed_edge_order_preserved() {
        let mut graph = Graph::new();
        for key in ["A", "B", "C", "D"] {
            graph.add_vertex(key, None).unwrap();
        }
        graph.add_directed_edge("A", "C").unwrap();
        graph.add_directed_edge("A", "B").unwrap();
        graph.add_directed_edge("A", "D").unwrap();

        assert_eq!(graph.neighbors("A").unwrap(), ["C", "B", "D"]);
        assert!(graph.neighbors("B").unwrap().is_empty());
    }

    #[test]
    fn test_edge_requires_both_endpoints() {
        let mut graph = Graph::new();
        graph.add_vertex("A", None).unwrap();

        let err = graph.add_directed_edge("A", "Z").unwrap_err();
        assert!(matches!(err, WayfindError::VertexNotFound { key } if key == "Z"));
        let err = graph.add_directed_edge("Z", "A").unwrap_err();
        assert!(matches!(err, WayfindError::VertexNotFound { key } if key == "Z"));
    }

    #[test]
    fn test_undirected_edge_is_two_directed() {
        let mut graph = Graph::new();
        graph.add_vertex("A", None).unwrap();
        graph.add_vertex("B", None).unwrap();
        graph.add_undirected_edge("A", "B").unwrap();

        assert_eq!(graph.neighbors("A").unwrap(), ["B"]);
        assert_eq!(graph.neighbors("B").unwrap(), ["A"]);
    }
}
