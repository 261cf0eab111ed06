pub mod adjacency;
pub mod generators;
pub mod route_map;
pub mod traits;

pub use adjacency::{Edge, Graph};
pub use route_map::RouteMap;
pub use traits::IncidenceGraph;
