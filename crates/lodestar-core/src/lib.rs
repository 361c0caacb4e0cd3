//! **lodestar-core** — Generic weighted-graph types and storage backends.
//!
//! This crate provides the graph side of the *lodestar* ecosystem: the
//! [`Vertex`] handle, the [`Edge`] record, the narrow [`WeightedGraph`]
//! read interface that search algorithms consume, and two concrete
//! backends implementing it:
//!
//! - [`AdjacencyListGraph`] — per-vertex edge lists, cheap sparse storage
//! - [`AdjacencyMatrixGraph`] — a dense weight matrix, O(1) weight lookup
//!
//! Search algorithms themselves live in the companion `lodestar-paths`
//! crate and only ever touch a graph through [`WeightedGraph`].

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod edge;
pub mod graph;
pub mod vertex;

pub use adjacency_list::AdjacencyListGraph;
pub use adjacency_matrix::AdjacencyMatrixGraph;
pub use edge::Edge;
pub use graph::WeightedGraph;
pub use vertex::Vertex;
