//! Graph construction and path-finding operations
//!
//! Provides the building blocks for unweighted shortest-path queries:
//! - Key-addressed vertex store with directed adjacency lists
//! - BFS traversal producing a parent map
//! - Path reconstruction by backward walk over parent links

pub mod bfs;
pub mod store;

pub use bfs::{parent_map, reconstruct, search_until, shortest_path, ParentMap, PathResult};
pub use store::{Graph, Vertex};
