use common::types::{Vertex, VertexId};
use proptest::prelude::*;
use proptest::strategy::Strategy;
use route_solver_core::DistanceGraph;
use route_solver_core::dijkstra::shortest_paths;

const NUM_NODES_STRATEGY: std::ops::Range<usize> = 1usize..10;

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    NUM_NODES_STRATEGY.prop_flat_map(|num_nodes| {
        let edge_generator = (0usize..num_nodes, 0usize..num_nodes, 0.0f64..10.0);
        let edges_generator = prop::collection::vec(edge_generator, 0..30);

        (proptest::strategy::Just(num_nodes), edges_generator)
    })
}

fn build_graph(num_nodes: usize, edges: &[(usize, usize, f64)]) -> DistanceGraph {
    let mut graph = DistanceGraph::new();
    for i in 0..num_nodes {
        graph.add_vertex(Vertex::new(format!("v{}", i)));
    }
    for &(a, b, w) in edges {
        graph.add_edge(a, b, w);
    }
    graph
}

/// Reference shortest distances via exhaustive relaxation to a fixpoint:
/// n - 1 rounds over every edge in both directions (the graph is
/// undirected). Slow but obviously correct for non-negative weights.
fn reference_distances(
    num_nodes: usize,
    edges: &[(usize, usize, f64)],
    source: VertexId,
) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; num_nodes];
    dist[source] = 0.0;
    for _ in 0..num_nodes.saturating_sub(1) {
        for &(a, b, w) in edges {
            if dist[a].is_finite() && dist[a] + w < dist[b] {
                dist[b] = dist[a] + w;
            }
            if dist[b].is_finite() && dist[b] + w < dist[a] {
                dist[a] = dist[b] + w;
            }
        }
    }
    dist
}

proptest! {
    /// Property: Dijkstra distances match the exhaustive relaxation
    /// fixpoint, i.e. no alternative path is strictly shorter.
    #[test]
    fn distances_are_optimal((num_nodes, edges) in graph_strategy()) {
        let graph = build_graph(num_nodes, &edges);
        let run = shortest_paths(&graph, 0);
        let reference = reference_distances(num_nodes, &edges, 0);

        for v in 0..num_nodes {
            if reference[v].is_finite() {
                prop_assert!((run.distance(v) - reference[v]).abs() < 1e-9);
            } else {
                prop_assert!(!run.is_reachable(v));
            }
        }
    }

    /// Property: for every reachable target, the reconstructed path starts
    /// at the source, ends at the target, walks real edges, and its summed
    /// weights equal the reported distance.
    #[test]
    fn paths_are_consistent_with_distances((num_nodes, edges) in graph_strategy()) {
        let graph = build_graph(num_nodes, &edges);
        let run = shortest_paths(&graph, 0);

        for target in 0..num_nodes {
            let path = run.path_to(target);
            if !run.is_reachable(target) {
                prop_assert!(path.is_empty());
                continue;
            }

            prop_assert_eq!(*path.first().unwrap(), 0);
            prop_assert_eq!(*path.last().unwrap(), target);

            let mut sum = 0.0;
            for pair in path.windows(2) {
                // Parallel edges are possible; the path must be explainable
                // by the cheapest one.
                let w = graph
                    .neighbors(pair[0])
                    .filter(|&(v, _)| v == pair[1])
                    .map(|(_, w)| w)
                    .fold(f64::INFINITY, f64::min);
                prop_assert!(w.is_finite());
                sum += w;
            }
            prop_assert!((sum - run.distance(target)).abs() < 1e-9);
        }
    }

    /// Property: the per-edge triangle inequality holds at the fixpoint.
    #[test]
    fn no_edge_still_relaxes((num_nodes, edges) in graph_strategy()) {
        let graph = build_graph(num_nodes, &edges);
        let run = shortest_paths(&graph, 0);

        for &(a, b, w) in &edges {
            if run.is_reachable(a) {
                prop_assert!(run.distance(b) <= run.distance(a) + w + 1e-9);
            }
            if run.is_reachable(b) {
                prop_assert!(run.distance(a) <= run.distance(b) + w + 1e-9);
            }
        }
    }

    /// Property: re-running over an unchanged graph reproduces the same
    /// distances and parent pointers (runs own their state).
    #[test]
    fn runs_are_idempotent((num_nodes, edges) in graph_strategy()) {
        let graph = build_graph(num_nodes, &edges);
        let first = shortest_paths(&graph, 0);
        let second = shortest_paths(&graph, 0);
        prop_assert_eq!(first, second);
    }
}
