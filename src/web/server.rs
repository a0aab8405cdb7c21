use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::graph::{demo_graph, GraphSpec, RoadGraph};
use crate::query::Algorithm;
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// JSON edge data; the built-in demo network when absent
    pub graph_file: Option<PathBuf>,
    pub enable_cors: bool,
    /// Used when a query does not name an algorithm
    pub default_algorithm: Algorithm,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            graph_file: None,
            enable_cors: true,
            default_algorithm: Algorithm::Dijkstra,
        }
    }
}

impl ServerConfig {
    /// Loads the configured graph
    pub fn load_graph(&self) -> crate::Result<RoadGraph> {
        match &self.graph_file {
            Some(path) => {
                info!("loading graph from {}", path.display());
                GraphSpec::from_path(path)?.build()
            }
            None => Ok(demo_graph()),
        }
    }
}

/// Builds the application: API routes plus optional CORS
pub fn build_app(state: AppState, enable_cors: bool) -> Router {
    let mut app = Router::new().merge(create_router()).with_state(state);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers([header::CONTENT_TYPE]);

        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    app
}

/// Start the web server with the given configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let graph = config.load_graph()?;
    let app_state = AppState::new(graph, config.default_algorithm);
    let app = build_app(app_state, config.enable_cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("route finder listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
