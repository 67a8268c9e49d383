//! Vertex type for the registry

use serde::{Deserialize, Serialize};

/// A vertex in the graph, identified by a unique, totally-ordered key.
///
/// Vertices carry no traversal state: visitation marks are owned by each
/// traversal call, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex<K> {
    key: K,
}

impl<K> Vertex<K> {
    pub fn new(key: K) -> Self {
        Vertex { key }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Consume the vertex, yielding its key.
    pub fn into_key(self) -> K {
        self.key
    }
}
