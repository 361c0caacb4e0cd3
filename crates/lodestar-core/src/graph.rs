//! The narrow [`WeightedGraph`] read interface.

use crate::{Edge, Vertex};

/// Read-only access to a weighted directed graph.
///
/// This is the complete capability set search algorithms require:
/// enumerate vertices, list outgoing edges with weights, and look up the
/// weight between two known-adjacent vertices. Any concrete
/// representation — adjacency list, adjacency matrix, a hash map of
/// edges — can implement it.
///
/// Implementations must be internally consistent: every edge yielded by
/// [`edges_from`](WeightedGraph::edges_from) must also answer
/// [`weight_between`](WeightedGraph::weight_between) for the same pair.
/// Search algorithms treat a violation as a fatal contract breach.
pub trait WeightedGraph {
    /// The user-supplied node payload type. Algorithms never inspect it
    /// beyond handing it to caller-provided functions.
    type Node;

    /// Number of vertices in the graph.
    fn len(&self) -> usize;

    /// Whether the graph holds no vertices.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `v` is a vertex of this graph.
    #[inline]
    fn contains(&self, v: Vertex) -> bool {
        v.index() < self.len()
    }

    /// All vertices, in ascending handle order.
    fn vertices(&self) -> Vec<Vertex> {
        (0..self.len()).map(Vertex::new).collect()
    }

    /// The payload stored at `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not part of this graph.
    fn node(&self, v: Vertex) -> &Self::Node;

    /// Append the outgoing edges of `v` into `buf`. The caller clears
    /// `buf` before calling.
    fn edges_from(&self, v: Vertex, buf: &mut Vec<Edge>);

    /// The weight of the edge from `from` to `to`, or `None` if no such
    /// edge exists.
    fn weight_between(&self, from: Vertex, to: Vertex) -> Option<f64>;
}
