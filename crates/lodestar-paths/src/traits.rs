use lodestar_core::Vertex;

/// Receives a notification for every vertex a search expands.
///
/// The notification fires exactly once per vertex, at the moment the
/// vertex is selected from the frontier for expansion — including the
/// goal itself, and never for vertices the search does not reach. It is
/// purely observational: nothing an observer does may influence the
/// search result.
pub trait SearchObserver {
    /// Called when `vertex` is selected for expansion.
    fn visited(&mut self, vertex: Vertex);
}

/// Any `FnMut(Vertex)` closure is an observer.
impl<F: FnMut(Vertex)> SearchObserver for F {
    fn visited(&mut self, vertex: Vertex) {
        self(vertex);
    }
}

/// The do-nothing observer used by [`astar`](crate::astar).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl SearchObserver for NoObserver {
    fn visited(&mut self, _vertex: Vertex) {}
}
