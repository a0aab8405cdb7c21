use std::fmt::{Debug, Display};
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::algorithm::path::{reconstruct_path, Path};
use crate::graph::Graph;
use crate::Result;

/// Distances and predecessors rooted at one source node
///
/// Both algorithms expose their output through this view so a path can be
/// reconstructed the same way regardless of how it was computed.
pub trait ShortestPathTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Index of the node the tree is rooted at
    fn source(&self) -> usize;

    /// Number of nodes covered by the tree
    fn node_count(&self) -> usize;

    /// Shortest distance from the source, `None` if unreachable or out of range
    fn distance_to(&self, target: usize) -> Option<W>;

    /// Node preceding `target` on its shortest path, `None` for the source and
    /// for unreached nodes
    fn predecessor_of(&self, target: usize) -> Option<usize>;
}

/// Result of a single-source shortest path computation
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each node, infinite when unreached
    pub distances: Vec<W>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source node index
    pub source: usize,
}

impl<W> ShortestPathTree<W> for ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn source(&self) -> usize {
        self.source
    }

    fn node_count(&self) -> usize {
        self.distances.len()
    }

    fn distance_to(&self, target: usize) -> Option<W> {
        self.distances
            .get(target)
            .copied()
            .filter(|distance| distance.is_finite())
    }

    fn predecessor_of(&self, target: usize) -> Option<usize> {
        self.predecessors.get(target).copied().flatten()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node index to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path between two named nodes
    ///
    /// Fails with `UnknownNode` if either name is absent and with `NoPathFound`
    /// if both exist but are not connected.
    fn shortest_path(&self, graph: &G, source: &N, target: &N) -> Result<Path<N, W>> {
        let source = graph.require_index(source)?;
        let target = graph.require_index(target)?;
        let tree = self.compute_shortest_paths(graph, source)?;
        reconstruct_path(graph, &tree, target)
    }
}
