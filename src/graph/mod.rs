pub mod traits;
pub mod undirected;
pub mod loader;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use undirected::UndirectedGraph;
pub use loader::{demo_graph, EdgeSpec, GraphSpec};

use ordered_float::OrderedFloat;

/// The concrete graph served to callers: string-named nodes, `f64` weights
pub type RoadGraph = UndirectedGraph<String, OrderedFloat<f64>>;
