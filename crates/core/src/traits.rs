use common::types::VertexId;

use super::graph::ProfitGraph;

/// Trait for strategies that search the profit graph for a negative cycle.
pub trait CycleFinder {
    /// Returns the vertices of a negative cycle in forward traversal order,
    /// or an empty vector when no negative cycle is reachable from the
    /// search's chosen source. Never fails: defensive termination paths
    /// also report "no cycle".
    fn find_negative_cycle(&self, graph: &ProfitGraph) -> Vec<VertexId>;
}
