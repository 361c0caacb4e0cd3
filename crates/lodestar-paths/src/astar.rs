use std::cmp::Ordering;
use std::collections::BinaryHeap;

use lodestar_core::{Edge, Vertex, WeightedGraph};

use crate::error::SearchError;
use crate::traits::{NoObserver, SearchObserver};

/// A path found by [`astar`], from start to goal inclusive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstarPath<N> {
    /// Node payloads along the path, in order. Holds a single element
    /// when start and goal coincide.
    pub nodes: Vec<N>,
    /// Sum of the edge weights along the path.
    pub distance: f64,
}

// ---------------------------------------------------------------------------
// Internal search state
// ---------------------------------------------------------------------------

/// Per-vertex bookkeeping, indexed by vertex slot. Allocated fresh for
/// every search call.
#[derive(Clone)]
struct Node {
    g: f64,
    parent: usize,
    closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: usize::MAX,
            closed: false,
        }
    }
}

/// Frontier entry, ordered by `f` for use in `BinaryHeap`.
///
/// Entries are never updated in place; a relaxation pushes a fresh entry
/// and the stale one is skipped when popped (its vertex is closed by
/// then).
#[derive(Clone, Copy)]
struct NodeRef {
    v: Vertex,
    f: f64,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; ties go
        // to the smaller vertex handle. NaN sorts to the bottom.
        match (self.f.is_nan(), other.f.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => other
                .f
                .partial_cmp(&self.f)
                .unwrap_or(Ordering::Equal)
                .then_with(|| other.v.cmp(&self.v)),
        }
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Find a minimum-weight path from `start` to `goal` using A*.
///
/// `heuristic` estimates the remaining distance between two node
/// payloads. It must be non-negative, and admissible (never
/// overestimating the true remaining cost) for the returned path to be
/// guaranteed optimal; neither property is verified.
///
/// Returns `Ok(None)` when no path connects `start` to `goal`. When
/// several optimal paths exist, ties between equal estimated costs are
/// broken toward the smaller vertex handle, so the result is
/// deterministic for a fixed graph and heuristic.
///
/// # Errors
///
/// - [`SearchError::UnknownVertex`] if `start` or `goal` is not part of
///   the graph.
/// - [`SearchError::MissingWeight`] if the graph yields an edge during
///   traversal but no weight for the same pair during path summation.
pub fn astar<G, H>(
    graph: &G,
    start: Vertex,
    goal: Vertex,
    heuristic: H,
) -> Result<Option<AstarPath<G::Node>>, SearchError>
where
    G: WeightedGraph,
    G::Node: Clone,
    H: FnMut(&G::Node, &G::Node) -> f64,
{
    astar_observed(graph, start, goal, heuristic, &mut NoObserver)
}

/// [`astar`], reporting every vertex expansion to `observer`.
///
/// The observer fires exactly once per expanded vertex, in expansion
/// order, including the goal on success; vertices the search never
/// reaches are never reported. See [`SearchObserver`].
pub fn astar_observed<G, H, O>(
    graph: &G,
    start: Vertex,
    goal: Vertex,
    mut heuristic: H,
    observer: &mut O,
) -> Result<Option<AstarPath<G::Node>>, SearchError>
where
    G: WeightedGraph,
    G::Node: Clone,
    H: FnMut(&G::Node, &G::Node) -> f64,
    O: SearchObserver,
{
    if !graph.contains(start) {
        return Err(SearchError::UnknownVertex(start));
    }
    if !graph.contains(goal) {
        return Err(SearchError::UnknownVertex(goal));
    }

    let goal_node = graph.node(goal);
    let mut nodes: Vec<Node> = vec![Node::default(); graph.len()];
    nodes[start.index()].g = 0.0;

    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        v: start,
        f: heuristic(graph.node(start), goal_node),
    });

    let mut ebuf: Vec<Edge> = Vec::new();

    while let Some(current) = open.pop() {
        let cv = current.v;
        let ci = cv.index();

        // Skip stale entries for already-finalized vertices.
        if nodes[ci].closed {
            continue;
        }

        observer.visited(cv);

        if cv == goal {
            return reconstruct(graph, &nodes, goal).map(Some);
        }

        nodes[ci].closed = true;
        let current_g = nodes[ci].g;

        ebuf.clear();
        graph.edges_from(cv, &mut ebuf);

        for edge in ebuf.iter() {
            let ni = edge.to.index();
            if nodes[ni].closed {
                continue;
            }
            let tentative_g = current_g + edge.weight;
            if tentative_g >= nodes[ni].g {
                continue;
            }

            nodes[ni].g = tentative_g;
            nodes[ni].parent = ci;
            open.push(NodeRef {
                v: edge.to,
                f: tentative_g + heuristic(graph.node(edge.to), goal_node),
            });
        }
    }

    log::debug!("a* frontier exhausted: {goal} unreachable from {start}");
    Ok(None)
}

/// Walk the predecessor chain backward from `goal`, then sum edge
/// weights over the forward path through the graph's weight lookup.
fn reconstruct<G>(
    graph: &G,
    nodes: &[Node],
    goal: Vertex,
) -> Result<AstarPath<G::Node>, SearchError>
where
    G: WeightedGraph,
    G::Node: Clone,
{
    let mut path = vec![goal];
    let mut ci = goal.index();
    while nodes[ci].parent != usize::MAX {
        ci = nodes[ci].parent;
        path.push(Vertex::new(ci));
    }
    path.reverse();

    let mut distance = 0.0;
    for pair in path.windows(2) {
        let (v0, v1) = (pair[0], pair[1]);
        distance += graph
            .weight_between(v0, v1)
            .ok_or(SearchError::MissingWeight { from: v0, to: v1 })?;
    }

    log::trace!("a* reached {goal}: {} vertices, distance {distance}", path.len());
    Ok(AstarPath {
        nodes: path.iter().map(|&v| graph.node(v).clone()).collect(),
        distance,
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn astar_path_round_trip() {
        let path = AstarPath {
            nodes: vec!["a".to_string(), "b".to_string()],
            distance: 3.5,
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: AstarPath<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
