//! Errors for graph operations

use thiserror::Error;

/// Errors that can occur during graph operations
///
/// All variants are value-level and caller-recoverable; the engine performs
/// no I/O and never aborts the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex already exists")]
    DuplicateVertex,

    #[error("vertex not found")]
    VertexNotFound,

    #[error("edge already exists")]
    DuplicateEdge,

    #[error("edge not found")]
    EdgeNotFound,

    #[error("index {0} out of range for {1} vertices")]
    IndexOutOfRange(usize, usize),

    #[error("cannot find shortest path from a vertex to itself")]
    SameVertex,

    #[error("no connecting path")]
    NoConnectingPath,

    #[error("no path found")]
    NoPathFound,
}

pub type GraphResult<T> = Result<T, GraphError>;
