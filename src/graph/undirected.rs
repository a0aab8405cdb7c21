use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use log::warn;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// An undirected graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct UndirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    /// Nodes in insertion order; a node's position is its index
    nodes: Vec<N>,

    /// Reverse lookup: node -> index
    index: HashMap<N, usize>,

    /// Incident edges for each node: index -> [(neighbor index, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Number of undirected edges
    edge_count: usize,
}

impl<N, W> UndirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        UndirectedGraph {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(u, v, weight)` triples, stopping at the first bad edge
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    fn validate_edge(from: &N, to: &N, weight: W) -> Result<()> {
        if !weight.is_finite() || weight < W::zero() {
            let raw = weight.to_f64().unwrap_or(f64::NAN);
            warn!("rejecting edge {} - {} with weight {}", from, to, raw);
            return Err(Error::InvalidWeight(raw));
        }
        if from == to {
            warn!("rejecting self-loop on {}", from);
            return Err(Error::SelfLoop(from.to_string()));
        }
        Ok(())
    }

    /// Sets `from -> to` to `weight`, returning true if the entry was new
    fn upsert_half_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        let edges = &mut self.adjacency[from];
        match edges.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => {
                edge.1 = weight;
                false
            }
            None => {
                edges.push((to, weight));
                true
            }
        }
    }
}

impl<N, W> Default for UndirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> Graph<N, W> for UndirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn nodes(&self) -> &[N] {
        &self.nodes
    }

    fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    fn node(&self, index: usize) -> Option<&N> {
        self.nodes.get(index)
    }

    fn adjacent(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(index) {
            Some(edges) => Box::new(edges.iter().cloned()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (&N, &N, W)> + '_> {
        Box::new(self.adjacency.iter().enumerate().flat_map(move |(u, edges)| {
            edges
                .iter()
                .filter(move |(v, _)| u < *v)
                .map(move |&(v, weight)| (&self.nodes[u], &self.nodes[v], weight))
        }))
    }
}

impl<N, W> MutableGraph<N, W> for UndirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, node: N) -> usize {
        if let Some(&existing) = self.index.get(&node) {
            return existing;
        }
        let new_id = self.nodes.len();
        self.index.insert(node.clone(), new_id);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        new_id
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()> {
        Self::validate_edge(&from, &to, weight)?;

        let u = self.add_node(from);
        let v = self.add_node(to);

        // Last write wins; both directions always carry the same weight
        let inserted = self.upsert_half_edge(u, v, weight);
        self.upsert_half_edge(v, u, weight);
        if inserted {
            self.edge_count += 1;
        }
        Ok(())
    }
}
