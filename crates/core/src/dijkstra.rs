use std::cmp::Ordering;
use std::collections::BinaryHeap;

use common::error::Error;
use common::types::{RouteLeg, RoutePlan, VertexId};

use super::graph::DistanceGraph;

/// Frontier entry ordered by tentative distance, smallest first.
/// `BinaryHeap` is a max-heap, so the comparison is reversed.
struct FrontierEntry {
    distance: f64,
    vertex: VertexId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.vertex == other.vertex
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.total_cmp(&self.distance)
    }
}

/// Result table of one single-source shortest-path run.
///
/// The run owns all of its working state; the graph is only read. Two runs
/// over the same graph therefore cannot interfere with each other.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: VertexId,
    distance: Vec<f64>,
    parent: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest distance from the source, `f64::INFINITY` when unreachable.
    pub fn distance(&self, target: VertexId) -> f64 {
        self.distance[target]
    }

    pub fn is_reachable(&self, target: VertexId) -> bool {
        self.distance[target].is_finite()
    }

    /// The shortest path in source -> target order, reconstructed by walking
    /// parent references back from the target. Empty when unreachable.
    pub fn path_to(&self, target: VertexId) -> Vec<VertexId> {
        if !self.is_reachable(target) {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut at = Some(target);
        while let Some(v) = at {
            path.push(v);
            at = self.parent[v];
        }
        path.reverse();
        path
    }
}

/// Textbook Dijkstra over the distance graph. Only correct for non-negative
/// edge weights; that precondition belongs to `DistanceGraph` and must never
/// be violated by callers.
pub fn shortest_paths(graph: &DistanceGraph, source: VertexId) -> ShortestPaths {
    let n = graph.len();
    let mut distance = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut visited = vec![false; n];

    distance[source] = 0.0;

    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        distance: 0.0,
        vertex: source,
    });

    while let Some(FrontierEntry { vertex: u, .. }) = frontier.pop() {
        // Stale entries from earlier relaxations are skipped here instead of
        // being removed from the heap when superseded.
        if visited[u] {
            continue;
        }
        visited[u] = true;

        for (v, weight) in graph.neighbors(u) {
            if visited[v] {
                continue;
            }
            let candidate = distance[u] + weight;
            if candidate < distance[v] {
                distance[v] = candidate;
                parent[v] = Some(u);
                frontier.push(FrontierEntry {
                    distance: candidate,
                    vertex: v,
                });
            }
        }
    }

    ShortestPaths {
        source,
        distance,
        parent,
    }
}

/// Chains independent shortest-path runs over `garage, w1, ..., wk, garage`
/// into one continuous route.
///
/// The waypoints arrive as names because the cycle they come from belongs to
/// the profit graph; each is mapped into the distance graph by name lookup.
/// Legs run strictly sequentially, one fresh run per leg with no state reuse
/// between them.
pub fn stitch_route(
    graph: &DistanceGraph,
    garage: VertexId,
    waypoints: &[&str],
) -> Result<RoutePlan, Error> {
    let mut stops = Vec::with_capacity(waypoints.len() + 2);
    stops.push(garage);
    for name in waypoints {
        let id = graph
            .vertex_id(name)
            .ok_or_else(|| Error::UnknownVertex((*name).to_string()))?;
        stops.push(id);
    }
    stops.push(garage);

    let mut legs = Vec::with_capacity(stops.len() - 1);
    let mut total_distance = 0.0;

    for pair in stops.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let run = shortest_paths(graph, from);
        if !run.is_reachable(to) {
            return Err(Error::UnreachableWaypoint {
                from: graph.vertex(from).name.clone(),
                to: graph.vertex(to).name.clone(),
            });
        }
        total_distance += run.distance(to);
        legs.push(RouteLeg {
            path: run.path_to(to),
            distance: run.distance(to),
        });
    }

    Ok(RoutePlan {
        legs,
        total_distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::Vertex;

    /// Garage - A - B triangle from the delivery scenario: Garage-A = 5,
    /// A-B = 6, B-Garage = 7.
    fn triangle() -> (DistanceGraph, VertexId, VertexId, VertexId) {
        let mut graph = DistanceGraph::new();
        let garage = graph.add_vertex(Vertex::new("Garage"));
        let a = graph.add_vertex(Vertex::new("A"));
        let b = graph.add_vertex(Vertex::new("B"));
        graph.add_edge(garage, a, 5.0);
        graph.add_edge(a, b, 6.0);
        graph.add_edge(b, garage, 7.0);
        (graph, garage, a, b)
    }

    #[test]
    fn finds_direct_and_detour_distances() {
        let (graph, garage, a, b) = triangle();
        let run = shortest_paths(&graph, garage);

        assert_eq!(run.distance(garage), 0.0);
        assert_eq!(run.distance(a), 5.0);
        // Direct edge 7 beats the detour 5 + 6 = 11.
        assert_eq!(run.distance(b), 7.0);
    }

    #[test]
    fn prefers_detour_when_direct_edge_is_longer() {
        let mut graph = DistanceGraph::new();
        let s = graph.add_vertex(Vertex::new("S"));
        let m = graph.add_vertex(Vertex::new("M"));
        let t = graph.add_vertex(Vertex::new("T"));
        graph.add_edge(s, t, 10.0);
        graph.add_edge(s, m, 2.0);
        graph.add_edge(m, t, 3.0);

        let run = shortest_paths(&graph, s);
        assert_eq!(run.distance(t), 5.0);
        assert_eq!(run.path_to(t), vec![s, m, t]);
    }

    #[test]
    fn path_weights_sum_to_reported_distance() {
        let (graph, garage, _, b) = triangle();
        let run = shortest_paths(&graph, garage);

        let path = run.path_to(b);
        assert_eq!(path.first(), Some(&garage));
        assert_eq!(path.last(), Some(&b));

        let mut sum = 0.0;
        for pair in path.windows(2) {
            let (u, v) = (pair[0], pair[1]);
            let w = graph
                .neighbors(u)
                .find(|&(n, _)| n == v)
                .map(|(_, w)| w)
                .expect("consecutive path vertices must be adjacent");
            sum += w;
        }
        assert_eq!(sum, run.distance(b));
    }

    #[test]
    fn unreachable_target_yields_empty_path() {
        let mut graph = DistanceGraph::new();
        let a = graph.add_vertex(Vertex::new("A"));
        let island = graph.add_vertex(Vertex::new("Island"));

        let run = shortest_paths(&graph, a);
        assert!(!run.is_reachable(island));
        assert!(run.path_to(island).is_empty());
    }

    #[test]
    fn single_vertex_graph_terminates_immediately() {
        let mut graph = DistanceGraph::new();
        let only = graph.add_vertex(Vertex::new("Only"));

        let run = shortest_paths(&graph, only);
        assert_eq!(run.distance(only), 0.0);
        assert_eq!(run.path_to(only), vec![only]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let (graph, garage, _, _) = triangle();

        let first = shortest_paths(&graph, garage);
        let second = shortest_paths(&graph, garage);
        assert_eq!(first, second);
    }

    #[test]
    fn stitches_full_delivery_loop() {
        let (graph, garage, ..) = triangle();

        let plan = stitch_route(&graph, garage, &["A", "B"]).unwrap();
        assert_eq!(plan.legs.len(), 3);
        assert_eq!(plan.total_distance, 18.0);
        assert_eq!(plan.legs[0].distance, 5.0);
        assert_eq!(plan.legs[1].distance, 6.0);
        assert_eq!(plan.legs[2].distance, 7.0);
    }

    #[test]
    fn stitch_rejects_unknown_waypoint() {
        let (graph, garage, ..) = triangle();

        let err = stitch_route(&graph, garage, &["A", "Nowhere"]).unwrap_err();
        assert!(matches!(err, Error::UnknownVertex(name) if name == "Nowhere"));
    }

    #[test]
    fn stitch_rejects_unreachable_waypoint() {
        let mut graph = DistanceGraph::new();
        let garage = graph.add_vertex(Vertex::new("Garage"));
        let a = graph.add_vertex(Vertex::new("A"));
        graph.add_vertex(Vertex::new("Island"));
        graph.add_edge(garage, a, 5.0);

        let err = stitch_route(&graph, garage, &["A", "Island"]).unwrap_err();
        assert!(matches!(
            err,
            Error::UnreachableWaypoint { to, .. } if to == "Island"
        ));
    }
}
