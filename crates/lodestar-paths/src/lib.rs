//! Shortest-path search over generic weighted graphs.
//!
//! This crate provides **A\*** minimum-weight pathfinding over any graph
//! exposing the narrow [`WeightedGraph`](lodestar_core::WeightedGraph)
//! read interface from `lodestar-core`:
//!
//! - [`astar`] — find a minimum-weight path between two vertices
//! - [`astar_observed`] — the same, reporting each vertex expansion to a
//!   caller-supplied [`SearchObserver`]
//!
//! Node payloads are opaque to the search; the caller supplies a
//! heuristic function over payload pairs. With an admissible heuristic
//! (never overestimating the true remaining cost) and non-negative edge
//! weights, the returned path is optimal.
//!
//! ```
//! use lodestar_core::AdjacencyListGraph;
//! use lodestar_paths::astar;
//!
//! let mut g = AdjacencyListGraph::new();
//! let a = g.add_vertex("a");
//! let b = g.add_vertex("b");
//! g.add_undirected_edge(a, b, 3.0);
//!
//! let found = astar(&g, a, b, |_, _| 0.0).unwrap().unwrap();
//! assert_eq!(found.nodes, vec!["a", "b"]);
//! assert_eq!(found.distance, 3.0);
//! ```

mod astar;
mod error;
mod traits;

pub use astar::{AstarPath, astar, astar_observed};
pub use error::SearchError;
pub use traits::{NoObserver, SearchObserver};
