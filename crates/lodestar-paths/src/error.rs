use lodestar_core::Vertex;
use thiserror::Error;

/// Failure modes of a search call.
///
/// An unreachable goal is **not** an error — it is the `Ok(None)` outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The start or goal handle does not belong to the graph.
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(Vertex),

    /// The graph listed an edge during traversal but answered the weight
    /// lookup for the same pair with nothing. The graph broke its
    /// consistency contract; the search result would be meaningless, so
    /// the call fails instead. Not recoverable.
    #[error("graph listed an edge {from} -> {to} during traversal but has no weight for it")]
    MissingWeight {
        /// Source vertex of the inconsistent edge.
        from: Vertex,
        /// Target vertex of the inconsistent edge.
        to: Vertex,
    },
}
