pub mod traits;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod path;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult, ShortestPathTree};
pub use path::{reconstruct_path, Path};
