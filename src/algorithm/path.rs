use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use log::warn;
use num_traits::{Float, Zero};

use crate::algorithm::traits::ShortestPathTree;
use crate::graph::Graph;
use crate::{Error, Result};

/// A route through the graph: source first, destination last, consecutive
/// nodes adjacent
#[derive(Debug, Clone, PartialEq)]
pub struct Path<N, W> {
    nodes: Vec<N>,
    total_weight: W,
}

impl<N, W> Path<N, W>
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    /// Nodes along the path, never empty
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Sum of the edge weights along the path
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    pub fn source(&self) -> &N {
        &self.nodes[0]
    }

    pub fn target(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Consecutive node pairs, i.e. the edges to highlight
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.nodes.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

impl<N, W> Display for Path<N, W>
where
    N: Display,
    W: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, " ({})", self.total_weight)
    }
}

/// Walks the predecessor chain of `tree` back from `target` and returns the
/// route from the tree's source to `target`
///
/// The chain must end at the source. A target that was never reached, or a
/// chain that stops anywhere else, is reported as `NoPathFound` rather than
/// returned as a truncated route.
pub fn reconstruct_path<N, W, G, T>(graph: &G, tree: &T, target: usize) -> Result<Path<N, W>>
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
    T: ShortestPathTree<W> + ?Sized,
{
    let source = tree.source();
    let source_node = graph.node(source).ok_or(Error::InvalidIndex(source))?;
    let target_node = graph.node(target).ok_or(Error::InvalidIndex(target))?;
    let no_path = || Error::NoPathFound {
        from: source_node.to_string(),
        to: target_node.to_string(),
    };

    let total_weight = tree.distance_to(target).ok_or_else(no_path)?;

    let mut indices = vec![target];
    let mut current = target;
    while let Some(pred) = tree.predecessor_of(current) {
        if indices.len() > tree.node_count() {
            warn!("predecessor cycle while walking back from {}", target_node);
            return Err(no_path());
        }
        indices.push(pred);
        current = pred;
    }

    if current != source {
        return Err(no_path());
    }

    indices.reverse();
    let nodes = indices
        .into_iter()
        .map(|i| graph.node(i).cloned().ok_or(Error::InvalidIndex(i)))
        .collect::<Result<Vec<N>>>()?;

    Ok(Path {
        nodes,
        total_weight,
    })
}
