//! Route Finder - shortest routes between named nodes
//!
//! This library computes minimum-weight paths in small, static, undirected
//! weighted graphs. Two interchangeable algorithms are provided: a
//! single-source label-setting search (Dijkstra) and an all-pairs dynamic
//! program (Floyd-Warshall). Both produce predecessor information that a single
//! path reconstructor turns into an ordered route.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod query;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, floyd_warshall::AllPairsResult, floyd_warshall::FloydWarshall,
    path::Path, ShortestPathAlgorithm, ShortestPathResult, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;
pub use query::{find_path, Algorithm, RouteIndex};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Invalid node index: {0}")]
    InvalidIndex(usize),

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),

    #[error("Self-loop on node {0} is not allowed")]
    SelfLoop(String),

    #[error("No path found from {from} to {to}")]
    NoPathFound { from: String, to: String },

    #[error("Invalid graph data: {0}")]
    InvalidGraphData(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the expected "no route exists" outcome, as opposed to bad input
    pub fn is_no_path(&self) -> bool {
        matches!(self, Error::NoPathFound { .. })
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
