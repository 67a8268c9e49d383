//! Graph state: vertex registry and dense adjacency store

mod error;
mod matrix;
mod store;
mod vertex;

pub use error::{GraphError, GraphResult};
pub use store::{DenseGraph, UNWEIGHTED_VALUE};
pub use vertex::Vertex;
