use log::info;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::graph::{Graph, MutableGraph, RoadGraph};
use crate::{Error, Result};

/// One undirected edge as it appears in graph data files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Edge data for building a graph, e.g.
/// `{"nodes": ["ISLAMABAD"], "edges": [{"from": "A", "to": "B", "weight": 1.0}]}`
///
/// `nodes` is optional and only needed for nodes without any edge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeSpec>,
}

impl GraphSpec {
    /// Parses graph data from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidGraphData(e.to_string()))
    }

    /// Reads graph data from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Builds the graph, rejecting the whole spec on the first invalid edge
    pub fn build(&self) -> Result<RoadGraph> {
        let mut graph = RoadGraph::with_capacity(self.nodes.len() + self.edges.len());
        for node in &self.nodes {
            graph.add_node(node.clone());
        }
        for edge in &self.edges {
            graph.add_edge(edge.from.clone(), edge.to.clone(), OrderedFloat(edge.weight))?;
        }
        info!(
            "loaded graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

/// The six-city road network (distances in km) used by the demo server
pub fn demo_graph() -> RoadGraph {
    let mut graph = RoadGraph::new();
    let roads = [
        ("KARACHI", "HYDERABAD", 164.0),
        ("KARACHI", "QUETTA", 686.0),
        ("HYDERABAD", "QUETTA", 707.0),
        ("HYDERABAD", "MULTAN", 745.0),
        ("QUETTA", "MULTAN", 633.0),
        ("MULTAN", "LAHORE", 339.0),
    ];
    for (from, to, km) in roads {
        // Constant, non-negative data; insertion cannot fail
        let _ = graph.add_edge(from.to_string(), to.to_string(), OrderedFloat(km));
    }
    graph
}
