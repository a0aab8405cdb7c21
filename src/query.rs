//! Named-node queries: the entry point for callers holding plain identifiers.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

use crate::algorithm::floyd_warshall::{AllPairsResult, FloydWarshall};
use crate::algorithm::{dijkstra::Dijkstra, reconstruct_path, Path, ShortestPathAlgorithm};
use crate::graph::{Graph, UndirectedGraph};
use crate::{Error, Result};

/// Which algorithm answers a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    Dijkstra,
    FloydWarshall,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::FloydWarshall => "floyd-warshall",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "floyd-warshall" | "floyd_warshall" | "floyd" => Ok(Algorithm::FloydWarshall),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Finds the shortest path between two named nodes with the chosen algorithm
///
/// `UnknownNode` is reported before any search runs; `NoPathFound` means both
/// nodes exist but lie in different components.
pub fn find_path<N, W, G>(graph: &G, algorithm: Algorithm, source: &N, target: &N) -> Result<Path<N, W>>
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    match algorithm {
        Algorithm::Dijkstra => Dijkstra::new().shortest_path(graph, source, target),
        Algorithm::FloydWarshall => FloydWarshall::new().shortest_path(graph, source, target),
    }
}

/// A graph paired with its precomputed all-pairs table
///
/// Built once, then shared read-only: every lookup is a table walk with no
/// recomputation, and a failed lookup leaves the index untouched.
#[derive(Debug, Clone)]
pub struct RouteIndex<N, W>
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    graph: UndirectedGraph<N, W>,
    table: AllPairsResult<W>,
}

impl<N, W> RouteIndex<N, W>
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    /// Takes ownership of the graph so it cannot change under the table
    pub fn new(graph: UndirectedGraph<N, W>) -> Self {
        let table = FloydWarshall::new().compute_all_pairs::<N, W, _>(&graph);
        RouteIndex { graph, table }
    }

    pub fn graph(&self) -> &UndirectedGraph<N, W> {
        &self.graph
    }

    pub fn table(&self) -> &AllPairsResult<W> {
        &self.table
    }

    /// Shortest distance between two named nodes, `None` when disconnected
    pub fn distance(&self, source: &N, target: &N) -> Result<Option<W>> {
        let s = self.graph.require_index(source)?;
        let t = self.graph.require_index(target)?;
        Ok(self.table.distance(s, t))
    }

    /// Shortest path between two named nodes
    pub fn query(&self, source: &N, target: &N) -> Result<Path<N, W>> {
        let s = self.graph.require_index(source)?;
        let t = self.graph.require_index(target)?;
        let row = self.table.from_source(s)?;
        reconstruct_path(&self.graph, &row, t)
    }
}
