use tracing::{info, warn};

use common::types::{RoutePlan, VertexId, VertexKind};
use route_solver_core::DistanceGraph;
use route_solver_core::dijkstra::{shortest_paths, stitch_route};
use route_solver_core::traits::CycleFinder;

use super::config::Config;
use super::error::Error;
use super::profit::build_profit_graph;

/// Result of a full profit analysis over one road map.
#[derive(Debug)]
pub enum Outcome {
    ProfitableRoute(RouteReport),
    NoProfitableCycle,
}

#[derive(Debug)]
pub struct RouteReport {
    /// The discovered cycle, as vertex names in forward traversal order.
    pub cycle: Vec<String>,
    /// Earnings of the cycle: the negated sum of its profit-edge weights.
    pub profit: f64,
    /// The concrete travel route stitched over the road map.
    pub plan: RoutePlan,
    pub travel_cost: f64,
    pub net_profit: f64,
}

/// The garage vertex, or the first vertex as a fallback when the map
/// defines none. `None` only for an empty map.
pub fn find_garage(map: &DistanceGraph) -> Option<VertexId> {
    if let Some((id, _)) = map.vertices().find(|(_, v)| v.kind == VertexKind::Garage) {
        return Some(id);
    }
    let first = map.vertices().next().map(|(id, _)| id);
    if first.is_some() {
        warn!("No garage vertex found. Using first vertex as default.");
    }
    first
}

/// Runs the two-engine pipeline: derive the profit graph, search it for a
/// negative cycle, and if one exists stitch the concrete travel route and
/// settle the accounting.
pub fn analyze<S: CycleFinder>(
    solver: &S,
    map: &DistanceGraph,
    config: &Config,
) -> Result<Outcome, Error> {
    let garage = find_garage(map).ok_or(Error::EmptyMap)?;
    let garage_name = map.vertex(garage).name.clone();

    info!("Deriving profit graph from the road map");
    let profit_graph = build_profit_graph(map, &garage_name, &config.profit);

    info!("Searching for a profitable delivery cycle");
    let cycle = solver.find_negative_cycle(&profit_graph);
    if cycle.is_empty() {
        return Ok(Outcome::NoProfitableCycle);
    }

    let cycle_names: Vec<String> = cycle
        .iter()
        .map(|&id| profit_graph.vertex(id).name.clone())
        .collect();
    let profit = -profit_graph.cycle_weight(&cycle);

    // The detector may hand back any rotation of the cycle. Stitching always
    // starts and ends at the garage, so when the garage appears in the cycle
    // it is rotated to the seam and dropped from the waypoint list; leaving
    // it mid-sequence would route through the garage twice.
    let waypoints: Vec<String> = match cycle_names.iter().position(|n| *n == garage_name) {
        Some(pos) => cycle_names[pos + 1..]
            .iter()
            .chain(cycle_names[..pos].iter())
            .cloned()
            .collect(),
        None => cycle_names.clone(),
    };

    info!(legs = waypoints.len() + 1, "Stitching travel route");
    let waypoint_refs: Vec<&str> = waypoints.iter().map(String::as_str).collect();
    let plan = stitch_route(map, garage, &waypoint_refs)?;

    let travel_cost = plan.travel_cost(config.costs.travel_cost_per_unit);
    let net_profit = profit - travel_cost;

    Ok(Outcome::ProfitableRoute(RouteReport {
        cycle: cycle_names,
        profit,
        plan,
        travel_cost,
        net_profit,
    }))
}

/// Prints the discovered cycle, each stitched leg, and the final accounting.
pub fn print_report(map: &DistanceGraph, report: &RouteReport) {
    println!("\nFound profitable delivery cycle:");
    println!("Cycle: {} -> {}", report.cycle.join(" -> "), report.cycle[0]);
    println!("Total profit for this cycle: ${}", report.profit);

    println!("\nRoute legs:");
    for leg in &report.plan.legs {
        let names: Vec<&str> = leg
            .path
            .iter()
            .map(|&id| map.vertex(id).name.as_str())
            .collect();
        println!("  {} ({} units)", names.join(" -> "), leg.distance);
    }

    println!("\n=== Final Analysis ===");
    println!("Total delivery profit: ${}", report.profit);
    println!(
        "Total travel distance: {} units",
        report.plan.total_distance
    );
    println!("Travel cost: ${}", report.travel_cost);
    println!("Final profit after travel costs: ${}", report.net_profit);
}

/// Fallback when no profitable cycle exists: pairwise shortest distances
/// between the garage, pickups and dropoffs.
pub fn print_distance_analysis(map: &DistanceGraph, garage: VertexId) {
    println!("\nRunning simple path analysis between key locations...");

    let pickups: Vec<VertexId> = map
        .vertices()
        .filter(|(_, v)| v.kind == VertexKind::Pickup)
        .map(|(id, _)| id)
        .collect();
    let dropoffs: Vec<VertexId> = map
        .vertices()
        .filter(|(_, v)| v.kind == VertexKind::Dropoff)
        .map(|(id, _)| id)
        .collect();

    let from_garage = shortest_paths(map, garage);
    println!("\nDistances from Garage to pickup points:");
    for &pickup in &pickups {
        println!(
            "To {}: {} units",
            map.vertex(pickup).name,
            from_garage.distance(pickup)
        );
    }

    println!("\nDistances from pickup to dropoff points:");
    for &pickup in &pickups {
        let run = shortest_paths(map, pickup);
        for &dropoff in &dropoffs {
            println!(
                "From {} to {}: {} units",
                map.vertex(pickup).name,
                map.vertex(dropoff).name,
                run.distance(dropoff)
            );
        }
    }

    println!("\nDistances from dropoff points back to Garage:");
    for &dropoff in &dropoffs {
        let run = shortest_paths(map, dropoff);
        println!(
            "From {}: {} units",
            map.vertex(dropoff).name,
            run.distance(garage)
        );
    }
}
