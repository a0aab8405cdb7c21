use std::fmt::{Debug, Display};
use std::hash::Hash;
use log::debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult, ShortestPathTree};
use crate::{Error, Result};

/// All-pairs shortest paths by dynamic programming over intermediate nodes
#[derive(Debug, Default, Clone, Copy)]
pub struct FloydWarshall;

/// Distance and predecessor matrices for every ordered pair of nodes
///
/// Rows and columns follow the graph's node indices. `predecessor(i, j)` is
/// the node before `j` on the best `i -> j` path.
#[derive(Debug, Clone)]
pub struct AllPairsResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    n: usize,
    /// Row-major `n x n`, infinite when unreachable
    distances: Vec<W>,
    /// Row-major `n x n`
    predecessors: Vec<Option<usize>>,
}

/// One row of an [`AllPairsResult`], viewed as a tree rooted at `source`
#[derive(Debug, Clone, Copy)]
pub struct SourceRow<'a, W>
where
    W: Float + Zero + Debug + Copy,
{
    table: &'a AllPairsResult<W>,
    source: usize,
}

impl FloydWarshall {
    /// Creates a new Floyd-Warshall algorithm instance
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Computes the full distance and predecessor matrices in O(n^3)
    pub fn compute_all_pairs<N, W, G>(&self, graph: &G) -> AllPairsResult<W>
    where
        N: Clone + Eq + Hash + Debug + Display,
        W: Float + Zero + Debug + Copy,
        G: Graph<N, W>,
    {
        let n = graph.node_count();
        let mut distances = vec![W::infinity(); n * n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n * n];

        for i in 0..n {
            distances[i * n + i] = W::zero();
            for (j, weight) in graph.adjacent(i) {
                distances[i * n + j] = weight;
                predecessors[i * n + j] = Some(i);
            }
        }

        // k must stay outermost: after round k, every entry is optimal over
        // intermediates drawn from 0..=k
        for k in 0..n {
            for i in 0..n {
                let via_k = distances[i * n + k];
                if via_k.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let through = via_k + distances[k * n + j];
                    if through < distances[i * n + j] {
                        distances[i * n + j] = through;
                        predecessors[i * n + j] = predecessors[k * n + j];
                    }
                }
            }
        }

        debug!("floyd-warshall: computed {}x{} table", n, n);

        AllPairsResult {
            n,
            distances,
            predecessors,
        }
    }
}

impl<W> AllPairsResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of nodes covered by the table
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Shortest `from -> to` distance, `None` if unreachable or out of range
    pub fn distance(&self, from: usize, to: usize) -> Option<W> {
        if from >= self.n || to >= self.n {
            return None;
        }
        Some(self.distances[from * self.n + to]).filter(|d| d.is_finite())
    }

    /// Node before `to` on the best `from -> to` path
    pub fn predecessor(&self, from: usize, to: usize) -> Option<usize> {
        if from >= self.n || to >= self.n {
            return None;
        }
        self.predecessors[from * self.n + to]
    }

    /// Borrows the row for `source` as a shortest path tree
    pub fn from_source(&self, source: usize) -> Result<SourceRow<'_, W>> {
        if source >= self.n {
            return Err(Error::InvalidIndex(source));
        }
        Ok(SourceRow {
            table: self,
            source,
        })
    }

    /// Copies the row for `source` into a single-source result
    pub fn single_source(&self, source: usize) -> Result<ShortestPathResult<W>> {
        if source >= self.n {
            return Err(Error::InvalidIndex(source));
        }
        let row = source * self.n..(source + 1) * self.n;
        Ok(ShortestPathResult {
            distances: self.distances[row.clone()].to_vec(),
            predecessors: self.predecessors[row].to_vec(),
            source,
        })
    }
}

impl<W> ShortestPathTree<W> for SourceRow<'_, W>
where
    W: Float + Zero + Debug + Copy,
{
    fn source(&self) -> usize {
        self.source
    }

    fn node_count(&self) -> usize {
        self.table.n
    }

    fn distance_to(&self, target: usize) -> Option<W> {
        self.table.distance(self.source, target)
    }

    fn predecessor_of(&self, target: usize) -> Option<usize> {
        self.table.predecessor(self.source, target)
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for FloydWarshall
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    /// Builds the whole table and keeps one row; use [`FloydWarshall::compute_all_pairs`]
    /// directly when answering more than one query
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if source >= graph.node_count() {
            return Err(Error::InvalidIndex(source));
        }
        self.compute_all_pairs::<N, W, G>(graph).single_source(source)
    }
}
