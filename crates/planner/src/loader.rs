use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use tracing::warn;

use common::types::{Vertex, VertexKind};
use route_solver_core::DistanceGraph;

use super::error::Error;

// Helper structs for CSV parsing
#[derive(Debug, Deserialize)]
pub struct VertexRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub map_row: i32,
    pub map_col: i32,

    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct DistanceRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Builds the distance graph from two CSV files: one listing vertices, one
/// listing pairwise distances. Both carry a header row. Distance rows naming
/// an unknown vertex are skipped; vertex rows with an unknown category tag
/// default to `normal`.
pub fn load_distance_graph(
    vertices_path: &str,
    distances_path: &str,
) -> Result<DistanceGraph, Error> {
    let mut graph = DistanceGraph::new();

    let vertices_file = File::open(vertices_path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(vertices_file);

    for result in rdr.deserialize() {
        let record: VertexRecord = result?;
        let mut vertex = Vertex::new(record.name);
        vertex.latitude = record.latitude;
        vertex.longitude = record.longitude;
        vertex.map_row = record.map_row;
        vertex.map_col = record.map_col;
        vertex.kind = VertexKind::parse(&record.kind).unwrap_or(VertexKind::Normal);
        graph.add_vertex(vertex);
    }

    let distances_file = File::open(distances_path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(distances_file);

    for result in rdr.deserialize() {
        let record: DistanceRecord = result?;
        match (graph.vertex_id(&record.from), graph.vertex_id(&record.to)) {
            (Some(from), Some(to)) => graph.add_edge(from, to, record.distance),
            _ => warn!(
                from = %record.from,
                to = %record.to,
                "skipping distance row with unknown vertex"
            ),
        }
    }

    Ok(graph)
}

/// Loads the map, substituting the built-in demonstration map when the CSV
/// files cannot be read.
pub fn load_or_demo(vertices_path: &str, distances_path: &str) -> DistanceGraph {
    match load_distance_graph(vertices_path, distances_path) {
        Ok(graph) => graph,
        Err(e) => {
            warn!("Failed to load map data: {}. Using demonstration map.", e);
            demo_graph()
        }
    }
}

/// Six locations around a garage: three pickups, two dropoffs, and twelve
/// undirected road segments.
pub fn demo_graph() -> DistanceGraph {
    let mut graph = DistanceGraph::new();

    let mut garage = Vertex::new("Garage").with_kind(VertexKind::Garage);
    garage.latitude = 40.7128;
    garage.longitude = -74.0060;

    let mut location_a = Vertex::new("LocationA").with_kind(VertexKind::Pickup);
    location_a.latitude = 40.7300;
    location_a.longitude = -74.0100;

    let mut location_b = Vertex::new("LocationB").with_kind(VertexKind::Pickup);
    location_b.latitude = 40.7200;
    location_b.longitude = -73.9900;

    let mut location_c = Vertex::new("LocationC").with_kind(VertexKind::Pickup);
    location_c.latitude = 40.7050;
    location_c.longitude = -74.0200;

    let mut location_d = Vertex::new("LocationD").with_kind(VertexKind::Dropoff);
    location_d.latitude = 40.7400;
    location_d.longitude = -73.9800;

    let mut location_e = Vertex::new("LocationE").with_kind(VertexKind::Dropoff);
    location_e.latitude = 40.7150;
    location_e.longitude = -73.9700;

    let garage = graph.add_vertex(garage);
    let a = graph.add_vertex(location_a);
    let b = graph.add_vertex(location_b);
    let c = graph.add_vertex(location_c);
    let d = graph.add_vertex(location_d);
    let e = graph.add_vertex(location_e);

    graph.add_edge(garage, a, 5.0);
    graph.add_edge(garage, b, 7.0);
    graph.add_edge(garage, c, 9.0);
    graph.add_edge(a, b, 3.0);
    graph.add_edge(a, d, 6.0);
    graph.add_edge(b, c, 4.0);
    graph.add_edge(b, d, 5.0);
    graph.add_edge(b, e, 8.0);
    graph.add_edge(c, e, 6.0);
    graph.add_edge(d, e, 4.0);
    graph.add_edge(d, garage, 8.0);
    graph.add_edge(e, garage, 7.0);

    graph
}
