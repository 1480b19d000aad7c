pub mod bellman_ford;
pub mod dijkstra;
pub mod graph;
pub mod traits;

pub use graph::{DistanceGraph, ProfitGraph};
