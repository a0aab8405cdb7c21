use std::fmt::{Debug, Display};
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::{Error, Result};

/// Trait representing a weighted undirected graph over named nodes
///
/// Nodes are addressed by dense indices `0..node_count()` assigned in insertion
/// order; algorithms work on indices and translate back to names at the edges.
pub trait Graph<N, W>: Debug
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns all nodes in insertion order
    fn nodes(&self) -> &[N];

    /// Returns the index of a node, if present
    fn index_of(&self, node: &N) -> Option<usize>;

    /// Returns the node stored at an index
    fn node(&self, index: usize) -> Option<&N>;

    /// Returns an iterator over `(neighbor index, weight)` pairs of a node
    fn adjacent(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Gets the weight of the edge between two node indices if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns every undirected edge exactly once as `(u, v, weight)`
    fn edges(&self) -> Box<dyn Iterator<Item = (&N, &N, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool {
        self.index_of(node).is_some()
    }

    /// Like `index_of`, but an absent node is an `UnknownNode` error
    fn require_index(&self, node: &N) -> Result<usize> {
        self.index_of(node)
            .ok_or_else(|| Error::UnknownNode(node.to_string()))
    }

    /// Returns the `(neighbor, weight)` pairs of every edge incident to `node`
    fn neighbors(&self, node: &N) -> Result<Vec<(&N, W)>> {
        let index = self.require_index(node)?;
        Ok(self
            .adjacent(index)
            .filter_map(|(v, weight)| self.node(v).map(|name| (name, weight)))
            .collect())
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a node if absent and returns its index
    fn add_node(&mut self, node: N) -> usize;

    /// Inserts or overwrites the undirected edge `{from, to}`
    ///
    /// Negative or non-finite weights and self-loops are rejected without touching the
    /// graph, so neither endpoint is inserted on failure.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()>;
}
