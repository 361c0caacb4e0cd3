//! Sparse graph backend: per-vertex edge lists.

use crate::{Edge, Vertex, WeightedGraph};

/// A weighted directed graph stored as per-vertex edge lists.
///
/// Suited to sparse graphs: memory is proportional to vertices plus
/// edges, and outgoing-edge enumeration is a slice copy. Weight lookup
/// scans the source vertex's list.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyListGraph<T> {
    nodes: Vec<T>,
    edges: Vec<Vec<Edge>>,
}

impl<T> AdjacencyListGraph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Insert a node and return its handle.
    pub fn add_vertex(&mut self, data: T) -> Vertex {
        let v = Vertex::new(self.nodes.len());
        self.nodes.push(data);
        self.edges.push(Vec::new());
        v
    }

    /// Insert a directed edge from `from` to `to`.
    ///
    /// A repeated insertion for the same pair adds a parallel edge; the
    /// first one keeps answering weight lookups.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is not part of this graph or `weight` is
    /// negative.
    pub fn add_directed_edge(&mut self, from: Vertex, to: Vertex, weight: f64) {
        assert!(self.contains(from), "unknown source vertex {from}");
        assert!(self.contains(to), "unknown target vertex {to}");
        assert!(weight >= 0.0, "negative edge weight {weight}");
        self.edges[from.index()].push(Edge::new(to, weight));
    }

    /// Insert an undirected edge between `a` and `b` as two directed
    /// edges of equal weight.
    pub fn add_undirected_edge(&mut self, a: Vertex, b: Vertex, weight: f64) {
        self.add_directed_edge(a, b, weight);
        self.add_directed_edge(b, a, weight);
    }
}

impl<T> WeightedGraph for AdjacencyListGraph<T> {
    type Node = T;

    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn node(&self, v: Vertex) -> &T {
        &self.nodes[v.index()]
    }

    fn edges_from(&self, v: Vertex, buf: &mut Vec<Edge>) {
        if let Some(list) = self.edges.get(v.index()) {
            buf.extend_from_slice(list);
        }
    }

    fn weight_between(&self, from: Vertex, to: Vertex) -> Option<f64> {
        self.edges
            .get(from.index())?
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight)
    }
}
