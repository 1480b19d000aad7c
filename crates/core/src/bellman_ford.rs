use common::types::VertexId;

use super::graph::ProfitGraph;
use super::traits::CycleFinder;

/// Bellman-Ford negative-cycle search over the profit graph.
///
/// Runs from a single source (the first vertex in insertion order), so a
/// negative cycle in a component unreachable from that source is not
/// detected. That limitation is deliberate: the profit graphs this engine is
/// built for always connect the garage to every pickup and every dropoff
/// back to the garage.
pub struct BellmanFord;

impl BellmanFord {
    /// Extracts the cycle once the witness pass has found a still-relaxing
    /// edge.
    ///
    /// The witness is only guaranteed to lie on or downstream of the cycle,
    /// so the parent chain is first walked exactly `n` steps to land
    /// strictly inside it. Both walks are bounded: a broken parent chain
    /// yields an empty cycle rather than an unbounded loop.
    fn reconstruct_cycle(
        witness: VertexId,
        parent: &[Option<VertexId>],
        n: usize,
    ) -> Vec<VertexId> {
        let mut inside = witness;
        for _ in 0..n {
            match parent[inside] {
                Some(p) => inside = p,
                None => return Vec::new(),
            }
        }

        let mut cycle = Vec::new();
        let mut seen = vec![false; n];
        let mut current = inside;

        loop {
            cycle.push(current);
            seen[current] = true;

            match parent[current] {
                None => return Vec::new(),
                Some(p) if p == inside => break,
                // A repeat that is not the start means the chain re-entered
                // itself unexpectedly; stop with what was collected.
                Some(p) if seen[p] => break,
                Some(p) => current = p,
            }
        }

        cycle.reverse();
        cycle
    }
}

impl CycleFinder for BellmanFord {
    fn find_negative_cycle(&self, graph: &ProfitGraph) -> Vec<VertexId> {
        let n = graph.len();
        if n == 0 {
            return Vec::new();
        }

        let mut distance = vec![f64::INFINITY; n];
        let mut parent: Vec<Option<VertexId>> = vec![None; n];

        // Arbitrary source: the first vertex in insertion order.
        distance[0] = 0.0;

        // Relax every edge n - 1 times; after that, all true shortest
        // distances have settled unless a negative cycle keeps improving.
        for _ in 0..n.saturating_sub(1) {
            for edge in graph.edges() {
                if distance[edge.from].is_finite()
                    && distance[edge.from] + edge.weight < distance[edge.to]
                {
                    distance[edge.to] = distance[edge.from] + edge.weight;
                    parent[edge.to] = Some(edge.from);
                }
            }
        }

        // Witness pass: any edge that still relaxes proves a negative cycle.
        for edge in graph.edges() {
            if distance[edge.from].is_finite()
                && distance[edge.from] + edge.weight < distance[edge.to]
            {
                return Self::reconstruct_cycle(edge.to, &parent, n);
            }
        }

        Vec::new()
    }
}
