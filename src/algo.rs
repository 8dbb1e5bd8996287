pub mod connected;
pub mod nearest;
pub mod shortest_paths;

pub use connected::{is_connected, is_path_between, Connected};
pub use nearest::nearest_vertex;
pub use shortest_paths::{Relaxation, ShortestPaths};
