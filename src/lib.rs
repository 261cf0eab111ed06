//! Single-source shortest paths over element-keyed weighted graphs.
//!
//! The crate is built from two collaborating data structures: an adaptable
//! priority queue ([`AdaptablePriorityQueue`]) whose entries can be re-keyed or
//! removed at any position in O(log n) through stable [`Handle`]s, and a
//! [`Graph`] keyed directly by the caller's vertex elements, with symmetric
//! adjacency storage and directed endpoint tags. [`Dijkstra`] drives both to
//! produce a [`ShortestPathTree`] holding per-vertex distances and
//! predecessors, from which explicit paths can be reconstructed.
//!
//! Everything is single-threaded and synchronous. A handle is only valid for
//! the queue that issued it, and only until `extract_min` or `remove` detaches
//! it.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{Dijkstra, PathStep, ShortestPathAlgorithm, ShortestPathTree};
pub use data_structures::{AdaptablePriorityQueue, Handle};
/// Re-export main types for convenient use
pub use graph::{Edge, Graph, RouteMap};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("operation on an empty priority queue")]
    EmptyQueue,

    #[error("handle refers to an entry that was already removed")]
    DetachedHandle,

    #[error("vertex not present in graph: {0}")]
    UnknownVertex(String),

    #[error("negative edge weight: {0}")]
    NegativeWeight(String),

    #[error("source vertex not found in graph: {0}")]
    SourceNotFound(String),

    #[error("target vertex is not reachable from the source: {0}")]
    UnreachableTarget(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
