pub mod collections;
pub mod dijkstra;

pub use collections::distance_table::DistanceTable;
pub use dijkstra::{shortest_paths, Dijkstra};
