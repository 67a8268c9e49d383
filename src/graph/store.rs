//! Dense adjacency storage and vertex registry
//!
//! The graph keeps vertices in an ordered sequence (a vertex's position in
//! that sequence is its index) and three square matrices indexed by vertex
//! position: edge weights, edge labels, and edge ordering keys. The
//! matrices are resized in lockstep whenever a vertex is added or removed.
//!
//! A weight of `+∞` means "no edge"; absent metadata is the empty label
//! with ordering key 0. Undirected graphs mirror every edge write so the
//! (x,y) and (y,x) cells stay identical.

use super::error::{GraphError, GraphResult};
use super::matrix::SquareMatrix;
use super::vertex::Vertex;

/// Weight assigned to edges added without an explicit weight.
pub const UNWEIGHTED_VALUE: f64 = 1.0;

/// A dense-matrix graph keyed by a totally-ordered vertex key.
#[derive(Debug, Clone)]
pub struct DenseGraph<K> {
    vertices: Vec<Vertex<K>>,
    weights: SquareMatrix<f64>,
    labels: SquareMatrix<String>,
    order_keys: SquareMatrix<i64>,
    directed: bool,
}

impl<K: Ord + Clone> Default for DenseGraph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone> DenseGraph<K> {
    /// Create an empty undirected graph.
    pub fn new() -> Self {
        Self::with_directed(false)
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::with_directed(true)
    }

    fn with_directed(directed: bool) -> Self {
        DenseGraph {
            vertices: Vec::new(),
            weights: SquareMatrix::new(),
            labels: SquareMatrix::new(),
            order_keys: SquareMatrix::new(),
            directed,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Remove every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.weights = SquareMatrix::new();
        self.labels = SquareMatrix::new();
        self.order_keys = SquareMatrix::new();
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of matrix cells holding a finite weight.
    ///
    /// Counts ordered pairs, so an undirected edge contributes two.
    pub fn num_edges(&self) -> usize {
        let n = self.num_vertices();
        let mut count = 0;
        for x in 0..n {
            for y in 0..n {
                if self.weights[(x, y)].is_finite() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Current index of `key`, if registered. Linear scan.
    pub fn find_index(&self, key: &K) -> Option<usize> {
        self.vertices.iter().position(|v| v.key() == key)
    }

    /// Vertex at `index`.
    pub fn vertex_at(&self, index: usize) -> GraphResult<&Vertex<K>> {
        self.vertices
            .get(index)
            .ok_or(GraphError::IndexOutOfRange(index, self.vertices.len()))
    }

    /// Key of the vertex at `index`.
    pub fn key_at(&self, index: usize) -> GraphResult<&K> {
        self.vertex_at(index).map(Vertex::key)
    }

    /// Insert a new vertex.
    ///
    /// Grows all matrices by one row and column initialized to "no edge".
    pub fn add_vertex(&mut self, key: K) -> GraphResult<()> {
        if self.find_index(&key).is_some() {
            return Err(GraphError::DuplicateVertex);
        }
        self.vertices.push(Vertex::new(key));
        self.weights.grow(f64::INFINITY);
        self.labels.grow(String::new());
        self.order_keys.grow(0);
        Ok(())
    }

    /// Remove the vertex with `key`, returning it.
    ///
    /// Compacts all matrices by deleting the vertex's row and column;
    /// every vertex stored after it shifts down one index.
    pub fn remove_vertex(&mut self, key: &K) -> GraphResult<Vertex<K>> {
        let index = self.find_index(key).ok_or(GraphError::VertexNotFound)?;
        self.weights.remove(index);
        self.labels.remove(index);
        self.order_keys.remove(index);
        Ok(self.vertices.remove(index))
    }

    fn resolve_pair(&self, key1: &K, key2: &K) -> Option<(usize, usize)> {
        Some((self.find_index(key1)?, self.find_index(key2)?))
    }

    /// Add an edge with an explicit weight.
    ///
    /// Fails with [`GraphError::DuplicateEdge`] if a finite weight is
    /// already stored at (x,y). Undirected graphs mirror the write.
    pub fn add_edge(&mut self, key1: &K, key2: &K, weight: f64) -> GraphResult<()> {
        let (x, y) = self
            .resolve_pair(key1, key2)
            .ok_or(GraphError::VertexNotFound)?;
        if self.weights[(x, y)].is_finite() {
            return Err(GraphError::DuplicateEdge);
        }
        self.weights[(x, y)] = weight;
        if !self.directed {
            self.weights[(y, x)] = weight;
        }
        Ok(())
    }

    /// Add an edge with the unweighted unit value.
    pub fn add_unweighted_edge(&mut self, key1: &K, key2: &K) -> GraphResult<()> {
        self.add_edge(key1, key2, UNWEIGHTED_VALUE)
    }

    /// Add or replace an edge carrying a label and an ordering key.
    ///
    /// The new edge replaces the stored one only when no edge exists yet,
    /// when the new ordering key is strictly smaller, or when the keys are
    /// equal and the new label sorts lexicographically first. Otherwise
    /// the stored edge is preferred and [`GraphError::DuplicateEdge`] is
    /// returned. For collaboration records this keeps the earliest
    /// release, tie-broken by title.
    ///
    /// Weight is set to [`UNWEIGHTED_VALUE`]; undirected graphs mirror
    /// weight and metadata.
    pub fn add_labeled_edge(
        &mut self,
        key1: &K,
        key2: &K,
        label: &str,
        order_key: i64,
    ) -> GraphResult<()> {
        let (x, y) = self
            .resolve_pair(key1, key2)
            .ok_or(GraphError::VertexNotFound)?;
        let exists = self.weights[(x, y)].is_finite();
        let stored_order = self.order_keys[(x, y)];
        let preferred = !exists
            || order_key < stored_order
            || (order_key == stored_order && label < self.labels[(x, y)].as_str());
        if !preferred {
            return Err(GraphError::DuplicateEdge);
        }
        self.weights[(x, y)] = UNWEIGHTED_VALUE;
        self.labels[(x, y)] = label.to_string();
        self.order_keys[(x, y)] = order_key;
        if !self.directed {
            self.weights[(y, x)] = UNWEIGHTED_VALUE;
            self.labels[(y, x)] = label.to_string();
            self.order_keys[(y, x)] = order_key;
        }
        Ok(())
    }

    /// Remove the edge between two keys, resetting weight and metadata.
    pub fn remove_edge(&mut self, key1: &K, key2: &K) -> GraphResult<()> {
        let (x, y) = self
            .resolve_pair(key1, key2)
            .ok_or(GraphError::VertexNotFound)?;
        self.clear_cell(x, y);
        if !self.directed {
            self.clear_cell(y, x);
        }
        Ok(())
    }

    fn clear_cell(&mut self, x: usize, y: usize) {
        self.weights[(x, y)] = f64::INFINITY;
        self.labels[(x, y)].clear();
        self.order_keys[(x, y)] = 0;
    }

    /// Stored weight at (x,y).
    ///
    /// `+∞` means "no edge" and is returned as-is; the error only signals
    /// that a key could not be resolved.
    pub fn get_weight(&self, key1: &K, key2: &K) -> GraphResult<f64> {
        let (x, y) = self
            .resolve_pair(key1, key2)
            .ok_or(GraphError::EdgeNotFound)?;
        Ok(self.weights[(x, y)])
    }

    /// Edge metadata formatted as `"label(order_key)"`.
    ///
    /// A cell without metadata formats as `"(0)"`.
    pub fn edge_metadata(&self, key1: &K, key2: &K) -> GraphResult<String> {
        let (x, y) = self
            .resolve_pair(key1, key2)
            .ok_or(GraphError::EdgeNotFound)?;
        Ok(format!(
            "{}({})",
            self.labels[(x, y)],
            self.order_keys[(x, y)]
        ))
    }

    /// Weight cell lookup by index, used by the traversal and path engines.
    pub(crate) fn weight_at(&self, x: usize, y: usize) -> f64 {
        self.weights[(x, y)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> DenseGraph<String> {
        let mut g = DenseGraph::new();
        for key in ["A", "B", "C"] {
            g.add_vertex(key.to_string()).unwrap();
        }
        g
    }

    #[test]
    fn vertex_accounting() {
        let mut g = abc();
        assert_eq!(g.num_vertices(), 3);
        assert!(!g.is_empty());
        assert_eq!(
            g.add_vertex("A".to_string()),
            Err(GraphError::DuplicateVertex)
        );
        assert_eq!(g.num_vertices(), 3);

        let removed = g.remove_vertex(&"B".to_string()).unwrap();
        assert_eq!(removed.key(), "B");
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(
            g.remove_vertex(&"B".to_string()),
            Err(GraphError::VertexNotFound)
        );

        g.clear();
        assert!(g.is_empty());
    }

    #[test]
    fn index_lookup() {
        let g = abc();
        assert_eq!(g.find_index(&"C".to_string()), Some(2));
        assert_eq!(g.find_index(&"Z".to_string()), None);
        assert_eq!(g.key_at(1).unwrap(), "B");
        assert_eq!(g.vertex_at(3), Err(GraphError::IndexOutOfRange(3, 3)));
    }

    #[test]
    fn undirected_edge_is_symmetric() {
        let mut g = abc();
        let (a, b) = ("A".to_string(), "B".to_string());
        g.add_edge(&a, &b, 2.5).unwrap();
        assert_eq!(g.get_weight(&a, &b).unwrap(), 2.5);
        assert_eq!(g.get_weight(&b, &a).unwrap(), 2.5);
        assert_eq!(g.num_edges(), 2);

        assert_eq!(g.add_edge(&a, &b, 9.0), Err(GraphError::DuplicateEdge));

        g.remove_edge(&a, &b).unwrap();
        assert!(g.get_weight(&a, &b).unwrap().is_infinite());
        assert!(g.get_weight(&b, &a).unwrap().is_infinite());
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn directed_edge_stores_one_direction() {
        let mut g: DenseGraph<String> = DenseGraph::directed();
        g.add_vertex("A".to_string()).unwrap();
        g.add_vertex("B".to_string()).unwrap();
        let (a, b) = ("A".to_string(), "B".to_string());
        g.add_unweighted_edge(&a, &b).unwrap();
        assert_eq!(g.get_weight(&a, &b).unwrap(), UNWEIGHTED_VALUE);
        assert!(g.get_weight(&b, &a).unwrap().is_infinite());
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn missing_vertices_are_reported() {
        let mut g = abc();
        let (a, z) = ("A".to_string(), "Z".to_string());
        assert_eq!(g.add_edge(&a, &z, 1.0), Err(GraphError::VertexNotFound));
        assert_eq!(g.remove_edge(&z, &a), Err(GraphError::VertexNotFound));
        assert_eq!(g.get_weight(&a, &z), Err(GraphError::EdgeNotFound));
        assert_eq!(g.edge_metadata(&z, &a), Err(GraphError::EdgeNotFound));
    }

    #[test]
    fn labeled_edge_keeps_earliest_release() {
        let mut g = abc();
        let (a, b) = ("A".to_string(), "B".to_string());
        g.add_labeled_edge(&a, &b, "Movie1", 1990).unwrap();
        assert_eq!(g.edge_metadata(&a, &b).unwrap(), "Movie1(1990)");

        // Earlier year replaces the stored edge.
        g.add_labeled_edge(&a, &b, "Movie2", 1985).unwrap();
        assert_eq!(g.edge_metadata(&a, &b).unwrap(), "Movie2(1985)");
        assert_eq!(g.edge_metadata(&b, &a).unwrap(), "Movie2(1985)");

        // Later year loses and the stored edge is untouched.
        assert_eq!(
            g.add_labeled_edge(&a, &b, "Movie3", 1990),
            Err(GraphError::DuplicateEdge)
        );
        assert_eq!(g.edge_metadata(&a, &b).unwrap(), "Movie2(1985)");
    }

    #[test]
    fn labeled_edge_ties_break_on_title() {
        let mut g = abc();
        let (a, b) = ("A".to_string(), "B".to_string());
        g.add_labeled_edge(&a, &b, "Beta", 1999).unwrap();
        g.add_labeled_edge(&a, &b, "Alpha", 1999).unwrap();
        assert_eq!(g.edge_metadata(&a, &b).unwrap(), "Alpha(1999)");
        assert_eq!(
            g.add_labeled_edge(&a, &b, "Gamma", 1999),
            Err(GraphError::DuplicateEdge)
        );
    }

    #[test]
    fn metadata_sentinel_for_bare_edges() {
        let mut g = abc();
        let (a, b) = ("A".to_string(), "B".to_string());
        g.add_edge(&a, &b, 1.0).unwrap();
        assert_eq!(g.edge_metadata(&a, &b).unwrap(), "(0)");
    }

    #[test]
    fn remove_vertex_compacts_matrices() {
        let mut g = abc();
        let (b, c) = ("B".to_string(), "C".to_string());
        g.add_labeled_edge(&b, &c, "Movie", 2001).unwrap();

        g.remove_vertex(&"A".to_string()).unwrap();
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.find_index(&b), Some(0));
        assert_eq!(g.find_index(&c), Some(1));
        assert_eq!(g.get_weight(&b, &c).unwrap(), UNWEIGHTED_VALUE);
        assert_eq!(g.edge_metadata(&c, &b).unwrap(), "Movie(2001)");
        assert_eq!(g.num_edges(), 2);
    }
}
