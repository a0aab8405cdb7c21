use std::fmt::{Debug, Display};
use std::hash::Hash;
use log::debug;
use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Among nodes with equal tentative distance, the one inserted into the graph
/// first is settled first.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    fn run<N, W, G>(graph: &G, source: usize) -> Result<ShortestPathResult<W>>
    where
        N: Clone + Eq + Hash + Debug + Display,
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<N, W>,
    {
        let n = graph.node_count();
        if source >= n {
            return Err(Error::InvalidIndex(source));
        }

        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut frontier = Frontier::new(n);
        frontier.relax(source, W::zero());

        while let Some((u, dist_u)) = frontier.pop() {
            for (v, weight) in graph.adjacent(u) {
                if frontier.relax(v, dist_u + weight) {
                    predecessors[v] = Some(u);
                }
            }
        }

        debug!(
            "dijkstra from {:?}: settled {} of {} nodes",
            graph.node(source),
            frontier.settled_count(),
            n
        );

        Ok(ShortestPathResult {
            distances: frontier.into_distances(),
            predecessors,
            source,
        })
    }

    /// Runs one search per node, in parallel, against the same read-only graph
    ///
    /// Entry `i` of the result is rooted at node index `i`.
    pub fn compute_all_sources<N, W, G>(&self, graph: &G) -> Result<Vec<ShortestPathResult<W>>>
    where
        N: Clone + Eq + Hash + Debug + Display,
        W: Float + Zero + Debug + Copy + Ord + Send + Sync,
        G: Graph<N, W> + Sync,
    {
        (0..graph.node_count())
            .into_par_iter()
            .map(|source| Self::run::<N, W, G>(graph, source))
            .collect()
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        Self::run::<N, W, G>(graph, source)
    }
}
