//! The [`Edge`] record returned from outgoing-edge queries.

use crate::Vertex;

/// A directed, weighted connection to a neighbouring vertex.
///
/// Weights are non-negative `f64` values. Backends must uphold
/// non-negativity; search algorithms assume it without checking.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// The vertex this edge leads to.
    pub to: Vertex,
    /// The edge weight. Must be >= 0.
    pub weight: f64,
}

impl Edge {
    /// Create an edge record.
    #[inline]
    pub const fn new(to: Vertex, weight: f64) -> Self {
        Self { to, weight }
    }
}
