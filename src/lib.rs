//! Costar Graph Engine
//!
//! A dense-graph engine for collaboration networks: vertex/edge management
//! over an adjacency matrix, breadth-first and depth-first traversal,
//! weighted shortest paths (Dijkstra), and graph diameter.
//!
//! Edges may carry collaboration metadata (a label and an integer ordering
//! key such as a release year). When several candidate edges connect the
//! same pair of vertices, the engine keeps the one with the smallest
//! ordering key, tie-broken by lexicographic label order.
//!
//! # Architecture
//!
//! - [`graph`]: vertex registry and adjacency store (the mutable state)
//! - [`algo`]: traversal and pathfinding over that state (read-only)
//! - [`import`]: record-file importer that populates a string-keyed graph
//! - [`shell`]: line-oriented interactive front end
//!
//! The engine is single-threaded; mutation takes `&mut self` and queries
//! take `&self`. Traversal state is owned by each call, so concurrent
//! read-only traversals of a shared graph are well-defined.

pub mod algo;
pub mod graph;
pub mod import;
pub mod shell;

pub use graph::{DenseGraph, GraphError, GraphResult, Vertex, UNWEIGHTED_VALUE};
pub use import::{import_file, ImportError, ImportStats};

/// Crate version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
