//! Dense graph backend: a weight matrix.

use crate::{Edge, Vertex, WeightedGraph};

/// A weighted directed graph stored as a dense `Option<f64>` matrix.
///
/// Weight lookup is O(1); memory and outgoing-edge enumeration are O(V),
/// so this backend suits small or dense graphs. Inserting a vertex grows
/// every row by one slot.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMatrixGraph<T> {
    nodes: Vec<T>,
    // weights[from][to]
    weights: Vec<Vec<Option<f64>>>,
}

impl<T> AdjacencyMatrixGraph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Insert a node and return its handle.
    pub fn add_vertex(&mut self, data: T) -> Vertex {
        let v = Vertex::new(self.nodes.len());
        self.nodes.push(data);
        for row in self.weights.iter_mut() {
            row.push(None);
        }
        self.weights.push(vec![None; self.nodes.len()]);
        v
    }

    /// Insert a directed edge from `from` to `to`, overwriting any
    /// existing weight for that pair.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is not part of this graph or `weight` is
    /// negative.
    pub fn add_directed_edge(&mut self, from: Vertex, to: Vertex, weight: f64) {
        assert!(self.contains(from), "unknown source vertex {from}");
        assert!(self.contains(to), "unknown target vertex {to}");
        assert!(weight >= 0.0, "negative edge weight {weight}");
        self.weights[from.index()][to.index()] = Some(weight);
    }

    /// Insert an undirected edge between `a` and `b` as two directed
    /// edges of equal weight.
    pub fn add_undirected_edge(&mut self, a: Vertex, b: Vertex, weight: f64) {
        self.add_directed_edge(a, b, weight);
        self.add_directed_edge(b, a, weight);
    }
}

impl<T> WeightedGraph for AdjacencyMatrixGraph<T> {
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
        let Some(row) = self.weights.get(v.index()) else {
            return;
        };
        for (to, w) in row.iter().enumerate() {
            if let Some(weight) = w {
                buf.push(Edge::new(Vertex::new(to), *weight));
            }
        }
    }

    fn weight_between(&self, from: Vertex, to: Vertex) -> Option<f64> {
        *self.weights.get(from.index())?.get(to.index())?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_grow_with_vertices() {
        let mut g: AdjacencyMatrixGraph<char> = AdjacencyMatrixGraph::new();
        let a = g.add_vertex('a');
        g.add_vertex('b');
        let c = g.add_vertex('c');
        g.add_directed_edge(a, c, 1.0);
        assert_eq!(g.weight_between(a, c), Some(1.0));
        assert_eq!(g.weight_between(c, a), None);
    }

    #[test]
    fn reinsertion_overwrites_weight() {
        let mut g: AdjacencyMatrixGraph<u32> = AdjacencyMatrixGraph::new();
        let a = g.add_vertex(0);
        let b = g.add_vertex(1);
        g.add_directed_edge(a, b, 3.0);
        g.add_directed_edge(a, b, 5.0);
        assert_eq!(g.weight_between(a, b), Some(5.0));
    }

    #[test]
    fn edges_from_enumerates_in_handle_order() {
        let mut g: AdjacencyMatrixGraph<u32> = AdjacencyMatrixGraph::new();
        let a = g.add_vertex(0);
        let b = g.add_vertex(1);
        let c = g.add_vertex(2);
        g.add_directed_edge(a, c, 2.0);
        g.add_directed_edge(a, b, 1.0);

        let mut buf = Vec::new();
        g.edges_from(a, &mut buf);
        assert_eq!(buf, vec![Edge::new(b, 1.0), Edge::new(c, 2.0)]);
    }

    #[test]
    fn undirected_edge_is_symmetric() {
        let mut g: AdjacencyMatrixGraph<u32> = AdjacencyMatrixGraph::new();
        let a = g.add_vertex(0);
        let b = g.add_vertex(1);
        g.add_undirected_edge(a, b, 10.0);
        assert_eq!(g.weight_between(a, b), Some(10.0));
        assert_eq!(g.weight_between(b, a), Some(10.0));
    }
}
