use route_finder::web::server::{start_server, ServerConfig};
use std::env;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Usage: web_server [port] [graph.json]
    let args: Vec<String> = env::args().collect();
    let defaults = ServerConfig::default();
    let port = match args.get(1) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("invalid port {:?}, using {}", raw, defaults.port);
            defaults.port
        }),
        None => defaults.port,
    };

    let config = ServerConfig {
        port,
        graph_file: args.get(2).map(PathBuf::from),
        ..defaults
    };

    println!("Starting route finder web server...");
    println!("   Port: {}", config.port);
    match &config.graph_file {
        Some(path) => println!("   Graph: {}", path.display()),
        None => println!("   Graph: built-in demo network"),
    }
    println!("   Default algorithm: {}", config.default_algorithm);
    println!("   CORS enabled: {}", config.enable_cors);
    println!();

    start_server(config).await?;

    Ok(())
}
