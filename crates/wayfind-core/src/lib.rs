//! Wayfind Core Library
//!
//! Graph construction, breadth-first search, and text-maze solving.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod maze;
