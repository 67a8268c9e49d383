//! Graph algorithms: traversal, shortest paths, diameter
//!
//! All algorithms read the dense adjacency matrix in index order and own
//! their visitation state for the duration of one call.

mod pathfinding;
mod traversal;
