use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use log::{info, warn};
use ordered_float::OrderedFloat;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::Path;
use crate::graph::{Graph, RoadGraph};
use crate::query::{find_path, Algorithm, RouteIndex};
use crate::web::models::*;
use crate::Error;

/// Shared application state
///
/// The graph and its all-pairs table are built once at startup and only read
/// afterwards, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteIndex<String, OrderedFloat<f64>>>,
    pub default_algorithm: Algorithm,
}

impl AppState {
    pub fn new(graph: RoadGraph, default_algorithm: Algorithm) -> Self {
        Self {
            routes: Arc::new(RouteIndex::new(graph)),
            default_algorithm,
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graph", get(get_graph))
        .route("/api/path", get(find_route))
        .route("/api/health", get(health_check))
}

/// Full node/edge/weight enumeration for drawing the graph
pub async fn get_graph(State(state): State<AppState>) -> Json<WebGraph> {
    Json(convert_graph_to_web(state.routes.graph()))
}

/// Find the shortest path between two named nodes
pub async fn find_route(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<PathResponse>, (StatusCode, Json<ErrorResponse>)> {
    let algorithm = match query.algorithm.as_deref() {
        Some(name) => name.parse::<Algorithm>().map_err(api_error)?,
        None => state.default_algorithm,
    };
    let source = query.source.trim().to_string();
    let destination = query.destination.trim().to_string();

    let start_time = Instant::now();
    let outcome = match algorithm {
        Algorithm::Dijkstra => find_path(state.routes.graph(), algorithm, &source, &destination),
        // Served from the table precomputed at startup
        Algorithm::FloydWarshall => state.routes.query(&source, &destination),
    };
    let execution_time = start_time.elapsed();

    let mut response = PathResponse {
        query_id: Uuid::new_v4(),
        algorithm: algorithm.to_string(),
        source,
        destination,
        found: false,
        path: Vec::new(),
        total_weight: None,
        path_edges: Vec::new(),
        message: None,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    };

    match outcome {
        Ok(path) => {
            info!("{} route: {}", algorithm, path);
            response.found = true;
            response.total_weight = Some(path.total_weight().into_inner());
            response.path_edges = path_edges(state.routes.graph(), &path);
            response.path = path.into_nodes();
        }
        Err(err) if err.is_no_path() => {
            info!("{}", err);
            response.message = Some(err.to_string());
        }
        Err(err) => return Err(api_error(err)),
    }

    Ok(Json(response))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let graph = state.routes.graph();
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "nodes": graph.node_count(),
        "edges": graph.edge_count(),
    }))
}

// Helper functions

fn api_error(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match &err {
        Error::UnknownNode(_) => (StatusCode::BAD_REQUEST, "unknown_node"),
        Error::UnknownAlgorithm(_) => (StatusCode::BAD_REQUEST, "invalid_algorithm"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "query_failed"),
    };
    warn!("path query rejected: {}", err);
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}

fn convert_graph_to_web(graph: &RoadGraph) -> WebGraph {
    let nodes = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(id, label)| WebNode {
            id,
            label: label.clone(),
        })
        .collect();

    let links = graph
        .edges()
        .map(|(u, v, weight)| WebEdge {
            source: u.clone(),
            target: v.clone(),
            weight: weight.into_inner(),
            is_path: false,
        })
        .collect();

    WebGraph { nodes, links }
}

fn path_edges(graph: &RoadGraph, path: &Path<String, OrderedFloat<f64>>) -> Vec<WebEdge> {
    path.edges()
        .filter_map(|(u, v)| {
            let weight = graph.edge_weight(graph.index_of(u)?, graph.index_of(v)?)?;
            Some(WebEdge {
                source: u.clone(),
                target: v.clone(),
                weight: weight.into_inner(),
                is_path: true,
            })
        })
        .collect()
}
