use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a node in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: usize,
    pub label: String,
}

/// Represents an edge in the graph for web visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
    #[serde(default)]
    pub is_path: bool,
}

/// Represents a complete graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

/// Query string of `GET /api/path`
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub algorithm: Option<String>,
}

/// Outcome of a path query
///
/// An unreachable destination is a normal answer: `found` is false, `path`
/// is empty and `message` says why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResponse {
    pub query_id: Uuid,
    pub algorithm: String,
    pub source: String,
    pub destination: String,
    pub found: bool,
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<f64>,
    pub path_edges: Vec<WebEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub execution_time_ms: f64,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
