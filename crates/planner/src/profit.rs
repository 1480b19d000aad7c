use common::types::VertexKind;
use route_solver_core::dijkstra::shortest_paths;
use route_solver_core::{DistanceGraph, ProfitGraph};

use super::config::ProfitConfig;

/// Derives the profit graph from the road map.
///
/// Every vertex is copied across by name. Edges encode the routing policy:
/// - `pickup -> dropoff` at `-(base_profit + distance * distance_profit)`,
///   where `distance` is the shortest-path distance on the road map; pairs
///   with no finite positive distance get no edge.
/// - `pickup -> pickup` between distinct pickups at `-multi_pickup_bonus`,
///   so loops that chain several pickups out-earn single deliveries.
/// - `garage -> pickup` and `dropoff -> garage` at zero. No garage->dropoff
///   and no dropoff->dropoff edges, which rules out cycles that skip the
///   pickup leg.
pub fn build_profit_graph(
    map: &DistanceGraph,
    garage_name: &str,
    profit: &ProfitConfig,
) -> ProfitGraph {
    let mut graph = ProfitGraph::new();

    for (_, vertex) in map.vertices() {
        graph.add_vertex(vertex.clone());
    }

    let pickups: Vec<(usize, String)> = map
        .vertices()
        .filter(|(_, v)| v.kind == VertexKind::Pickup)
        .map(|(id, v)| (id, v.name.clone()))
        .collect();
    let dropoffs: Vec<(usize, String)> = map
        .vertices()
        .filter(|(_, v)| v.kind == VertexKind::Dropoff)
        .map(|(id, v)| (id, v.name.clone()))
        .collect();

    // One shortest-path run per pickup covers all of its dropoff targets.
    for (pickup_id, pickup_name) in &pickups {
        let run = shortest_paths(map, *pickup_id);
        for (dropoff_id, dropoff_name) in &dropoffs {
            let distance = run.distance(*dropoff_id);
            if distance.is_finite() && distance > 0.0 {
                let earnings = profit.base_profit + distance * profit.distance_profit;
                graph.add_edge(pickup_name, dropoff_name, -earnings);
            }
        }
    }

    for (_, from_name) in &pickups {
        for (_, to_name) in &pickups {
            if from_name != to_name {
                graph.add_edge(from_name, to_name, -profit.multi_pickup_bonus);
            }
        }
    }

    for (_, pickup_name) in &pickups {
        graph.add_edge(garage_name, pickup_name, 0.0);
    }
    for (_, dropoff_name) in &dropoffs {
        graph.add_edge(dropoff_name, garage_name, 0.0);
    }

    graph
}
