//! The [`Vertex`] handle.

use std::fmt;

/// An opaque handle identifying a node's slot in a graph.
///
/// A `Vertex` is issued by a graph backend when a node is inserted and is
/// only meaningful for the graph that issued it. Handles are plain slot
/// indices: `Copy`, hashable, and totally ordered. The derived `Ord`
/// (ascending insertion order) is the stable ordering search algorithms
/// use to break ties between equal-score candidates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex(usize);

impl Vertex {
    /// Create a handle for the given slot index.
    ///
    /// Backends call this when inserting nodes; code implementing
    /// [`WeightedGraph`](crate::WeightedGraph) for its own storage does
    /// the same. Handles fabricated out of thin air simply fail the
    /// graph's `contains` check.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The slot index backing this handle.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
