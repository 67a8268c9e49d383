//! Weighted shortest paths and graph diameter
//!
//! Dijkstra here is the dense-matrix variant: the distance array is seeded
//! from the start vertex's matrix row and every round selects the
//! minimum-distance unvisited vertex by linear scan. With V vertices a
//! query is O(V²), which matches the adjacency-matrix storage and the
//! graph sizes this engine targets. Weights must be non-negative.

use crate::graph::{DenseGraph, GraphError, GraphResult};

impl<K: Ord + Clone> DenseGraph<K> {
    /// Dijkstra shortest path from `start` to `goal` by total edge weight.
    ///
    /// Returns the path as keys from `start` to `goal` inclusive. Fails
    /// with [`GraphError::SameVertex`] when the endpoints compare equal
    /// and [`GraphError::NoConnectingPath`] when `goal` is unreachable.
    pub fn shortest_path(&self, start: &K, goal: &K) -> GraphResult<Vec<K>> {
        if start == goal {
            return Err(GraphError::SameVertex);
        }
        let start_idx = self.find_index(start).ok_or(GraphError::VertexNotFound)?;
        let goal_idx = self.find_index(goal).ok_or(GraphError::VertexNotFound)?;
        let n = self.num_vertices();

        // Seed distances from the start row; a vertex with a finite seed
        // has the start as its tentative predecessor, every other vertex
        // points at itself until relaxation improves it.
        let mut visited = vec![false; n];
        let mut dist = vec![f64::INFINITY; n];
        let mut pred: Vec<usize> = (0..n).collect();
        visited[start_idx] = true;
        for next in 0..n {
            dist[next] = self.weight_at(start_idx, next);
            if dist[next].is_finite() {
                pred[next] = start_idx;
            }
        }

        for _ in 1..n {
            let mut smallest = None;
            let mut smallest_dist = f64::INFINITY;
            for candidate in 0..n {
                if !visited[candidate] && dist[candidate] <= smallest_dist {
                    smallest = Some(candidate);
                    smallest_dist = dist[candidate];
                }
            }
            let Some(smallest) = smallest else {
                break;
            };
            visited[smallest] = true;
            for next in 0..n {
                let relaxed = dist[smallest] + self.weight_at(smallest, next);
                if relaxed < dist[next] {
                    dist[next] = relaxed;
                    pred[next] = smallest;
                }
            }
        }

        // Backtrace predecessor links from the goal; a self-link before
        // reaching the start means the goal was never relaxed.
        let mut reversed = Vec::new();
        let mut current = goal_idx;
        while current != start_idx {
            reversed.push(self.key_at(current)?.clone());
            let previous = pred[current];
            if previous == current {
                return Err(GraphError::NoConnectingPath);
            }
            current = previous;
        }
        reversed.push(self.key_at(start_idx)?.clone());
        reversed.reverse();
        Ok(reversed)
    }

    /// Longest shortest-path edge count between any two vertices.
    ///
    /// Returns `+∞` for a disconnected graph (checked up front, the pair
    /// scan is expensive) and 0 for graphs with fewer than two vertices.
    /// Brute force: one Dijkstra query per ordered vertex pair.
    pub fn diameter(&self) -> GraphResult<f64> {
        if !self.is_connected() {
            return Ok(f64::INFINITY);
        }
        let n = self.num_vertices();
        if n < 2 {
            return Ok(0.0);
        }
        let mut longest = 0usize;
        for x in 0..n {
            let from = self.key_at(x)?.clone();
            let mut per_source = 0usize;
            for y in 0..n {
                if x == y {
                    continue;
                }
                let path = self.shortest_path(&from, self.key_at(y)?)?;
                per_source = per_source.max(path.len());
            }
            longest = longest.max(per_source);
        }
        // Path length counts vertices; the diameter counts edges.
        Ok((longest - 1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(keys: &[&str]) -> DenseGraph<String> {
        let mut g = DenseGraph::new();
        for key in keys {
            g.add_vertex((*key).to_string()).unwrap();
        }
        g
    }

    #[test]
    fn prefers_lighter_multi_hop_route() {
        let mut g = keyed(&["A", "B", "C"]);
        let (a, b, c) = ("A".to_string(), "B".to_string(), "C".to_string());
        g.add_edge(&a, &b, 1.0).unwrap();
        g.add_edge(&b, &c, 1.0).unwrap();
        g.add_edge(&a, &c, 5.0).unwrap();

        let path = g.shortest_path(&a, &c).unwrap();
        assert_eq!(path, ["A", "B", "C"]);

        let total: f64 = path
            .windows(2)
            .map(|pair| g.get_weight(&pair[0], &pair[1]).unwrap())
            .sum();
        assert_eq!(total, 2.0);
    }

    #[test]
    fn direct_edge_wins_when_lighter() {
        let mut g = keyed(&["A", "B", "C"]);
        let (a, b, c) = ("A".to_string(), "B".to_string(), "C".to_string());
        g.add_edge(&a, &b, 4.0).unwrap();
        g.add_edge(&b, &c, 4.0).unwrap();
        g.add_edge(&a, &c, 5.0).unwrap();

        assert_eq!(g.shortest_path(&a, &c).unwrap(), ["A", "C"]);
    }

    #[test]
    fn same_vertex_is_rejected() {
        let g = keyed(&["A", "B"]);
        assert_eq!(
            g.shortest_path(&"A".to_string(), &"A".to_string()),
            Err(GraphError::SameVertex)
        );
    }

    #[test]
    fn unreachable_goal_is_no_connecting_path() {
        let mut g = keyed(&["A", "B", "C"]);
        g.add_edge(&"A".to_string(), &"B".to_string(), 1.0).unwrap();
        assert_eq!(
            g.shortest_path(&"A".to_string(), &"C".to_string()),
            Err(GraphError::NoConnectingPath)
        );
    }

    #[test]
    fn missing_endpoint_is_vertex_not_found() {
        let g = keyed(&["A"]);
        assert_eq!(
            g.shortest_path(&"A".to_string(), &"Z".to_string()),
            Err(GraphError::VertexNotFound)
        );
    }

    #[test]
    fn path_graph_diameter_counts_edges() {
        let mut g = keyed(&["A", "B", "C"]);
        g.add_unweighted_edge(&"A".to_string(), &"B".to_string())
            .unwrap();
        g.add_unweighted_edge(&"B".to_string(), &"C".to_string())
            .unwrap();
        assert_eq!(g.diameter().unwrap(), 2.0);
    }

    #[test]
    fn disconnected_diameter_is_infinite() {
        let g = keyed(&["A", "B"]);
        assert!(g.diameter().unwrap().is_infinite());
    }

    #[test]
    fn trivial_diameters() {
        let empty: DenseGraph<String> = DenseGraph::new();
        assert_eq!(empty.diameter().unwrap(), 0.0);

        let single = keyed(&["A"]);
        assert_eq!(single.diameter().unwrap(), 0.0);
    }

    #[test]
    fn complete_triangle_has_diameter_one() {
        let mut g = keyed(&["A", "B", "C"]);
        for (x, y) in [("A", "B"), ("B", "C"), ("A", "C")] {
            g.add_unweighted_edge(&x.to_string(), &y.to_string()).unwrap();
        }
        assert_eq!(g.diameter().unwrap(), 1.0);
    }
}
