//! Breadth-first and depth-first traversal
//!
//! Each call owns its visitation marks (`Vec<bool>` sized to the vertex
//! count), so the graph itself is never mutated and repeated or
//! interleaved traversals cannot observe stale marks.

use crate::graph::{DenseGraph, GraphError, GraphResult};
use std::collections::VecDeque;

impl<K: Ord + Clone> DenseGraph<K> {
    /// Breadth-first traversal from `start`.
    ///
    /// Returns every vertex reachable from `start` in discovery order,
    /// `start` first. Neighbors are scanned in ascending index order, so
    /// the order is deterministic for a given graph.
    pub fn bft(&self, start: &K) -> GraphResult<Vec<K>> {
        let start_idx = self.find_index(start).ok_or(GraphError::VertexNotFound)?;
        let n = self.num_vertices();
        let mut visited = vec![false; n];
        let mut order = Vec::new();
        let mut frontier = VecDeque::new();

        visited[start_idx] = true;
        order.push(self.key_at(start_idx)?.clone());
        frontier.push_back(start_idx);

        while let Some(current) = frontier.pop_front() {
            for next in 0..n {
                if self.weight_at(current, next).is_finite() && !visited[next] {
                    visited[next] = true;
                    order.push(self.key_at(next)?.clone());
                    frontier.push_back(next);
                }
            }
        }
        Ok(order)
    }

    /// Breadth-first path from `start` to `goal`.
    ///
    /// Returns the [`bft`](Self::bft) discovery order truncated at the
    /// first occurrence of `goal`. This walks the BFS tree but is a prefix
    /// of the linear discovery order, not a parent-pointer backtrace, so
    /// it is not guaranteed to be a minimum-hop path. When `goal` is
    /// unreachable the full discovery order is returned unchanged.
    pub fn bfs(&self, start: &K, goal: &K) -> GraphResult<Vec<K>> {
        let mut order = self.bft(start)?;
        if let Some(pos) = order.iter().position(|key| key == goal) {
            order.truncate(pos + 1);
        }
        Ok(order)
    }

    /// Depth-first traversal from `start`.
    ///
    /// Recursive preorder walk; neighbors are visited in ascending index
    /// order. Fails with [`GraphError::NoPathFound`] on an empty result,
    /// which cannot occur for a registered start vertex since the start is
    /// always recorded first.
    pub fn dft(&self, start: &K) -> GraphResult<Vec<K>> {
        let start_idx = self.find_index(start).ok_or(GraphError::VertexNotFound)?;
        let mut visited = vec![false; self.num_vertices()];
        let mut order = Vec::new();
        self.dft_visit(start_idx, &mut visited, &mut order)?;
        if order.is_empty() {
            return Err(GraphError::NoPathFound);
        }
        Ok(order)
    }

    fn dft_visit(
        &self,
        current: usize,
        visited: &mut [bool],
        order: &mut Vec<K>,
    ) -> GraphResult<()> {
        visited[current] = true;
        order.push(self.key_at(current)?.clone());
        for next in 0..self.num_vertices() {
            if self.weight_at(current, next).is_finite() && !visited[next] {
                self.dft_visit(next, visited, order)?;
            }
        }
        Ok(())
    }

    /// Whether every vertex can reach every other vertex.
    ///
    /// Runs a full [`bft`](Self::bft) from each vertex; O(V) traversals of
    /// O(V²) each. Vacuously true for the empty graph.
    pub fn is_connected(&self) -> bool {
        let n = self.num_vertices();
        for index in 0..n {
            let reachable = self
                .key_at(index)
                .and_then(|key| self.bft(&key.clone()))
                .map(|order| order.len())
                .unwrap_or(0);
            if reachable != n {
                return false;
            }
        }
        true
    }
}
