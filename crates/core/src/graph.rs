use std::collections::HashMap;

use common::types::{Edge, EdgeId, Vertex, VertexId};

/// Vertex table shared by both graph variants: vertices in insertion order
/// plus a name index. Handles stay stable for the lifetime of the graph.
#[derive(Debug, Default)]
struct VertexStore {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
}

impl VertexStore {
    /// Inserts under the vertex's name. Names are a caller contract
    /// (pre-validated unique); a duplicate name replaces the stored
    /// attributes at the existing slot and keeps its handle.
    fn insert(&mut self, vertex: Vertex) -> (VertexId, bool) {
        match self.index.get(&vertex.name) {
            Some(&id) => {
                self.vertices[id] = vertex;
                (id, false)
            }
            None => {
                let id = self.vertices.len();
                self.index.insert(vertex.name.clone(), id);
                self.vertices.push(vertex);
                (id, true)
            }
        }
    }

    fn id_of(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }
}

/// The road map: undirected edges with non-negative weights (distances).
///
/// Non-negativity is a convention, not enforced; it is the hard precondition
/// of the shortest-path engine. A single arena edge is registered on both
/// endpoints' adjacency lists, so traversal derives the far endpoint from
/// whichever side matches the current vertex.
#[derive(Debug, Default)]
pub struct DistanceGraph {
    store: VertexStore,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl DistanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins on duplicate names.
    pub fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        let (id, fresh) = self.store.insert(vertex);
        if fresh {
            self.adjacency.push(Vec::new());
        }
        id
    }

    /// Registers one shared edge on both endpoints.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: f64) {
        let edge_id = self.edges.len();
        self.edges.push(Edge {
            from: a,
            to: b,
            weight,
        });
        self.adjacency[a].push(edge_id);
        self.adjacency[b].push(edge_id);
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.store.id_of(name)
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.store.vertices[id]
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.store.vertices.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.store.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.vertices.is_empty()
    }

    /// Incident edges of `u` as `(far endpoint, weight)` pairs.
    pub fn neighbors(&self, u: VertexId) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.adjacency[u]
            .iter()
            .map(move |&edge_id| (self.edges[edge_id].other(u), self.edges[edge_id].weight))
    }
}

/// The profit graph: directed edges whose weights encode earnings
/// (negative weight = profit, zero = neutral transition).
#[derive(Debug, Default)]
pub struct ProfitGraph {
    store: VertexStore,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl ProfitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins on duplicate names.
    pub fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        let (id, fresh) = self.store.insert(vertex);
        if fresh {
            self.adjacency.push(Vec::new());
        }
        id
    }

    /// Resolves both names and registers a directed edge on the source.
    /// A name that does not resolve makes the call a silent no-op; that is
    /// documented behavior, not a failure.
    pub fn add_edge(&mut self, from_name: &str, to_name: &str, weight: f64) {
        let (Some(from), Some(to)) = (self.store.id_of(from_name), self.store.id_of(to_name))
        else {
            return;
        };
        let edge_id = self.edges.len();
        self.edges.push(Edge { from, to, weight });
        self.adjacency[from].push(edge_id);
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.store.id_of(name)
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.store.vertices[id]
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.store.vertices.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.store.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.vertices.is_empty()
    }

    /// The full edge arena, in registration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Outgoing edges of `u` as `(target, weight)` pairs.
    pub fn outgoing(&self, u: VertexId) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.adjacency[u]
            .iter()
            .map(|&edge_id| (self.edges[edge_id].to, self.edges[edge_id].weight))
    }

    /// Total weight of a cycle: for each consecutive pair (wrapping
    /// last -> first), the weight of the first matching directed edge.
    /// Pairs with no connecting edge contribute nothing. A negative total
    /// means the cycle is profitable; profit is the negation.
    pub fn cycle_weight(&self, cycle: &[VertexId]) -> f64 {
        if cycle.is_empty() {
            return 0.0;
        }
        let mut total = 0.0;
        for (i, &u) in cycle.iter().enumerate() {
            let v = cycle[(i + 1) % cycle.len()];
            if let Some(w) = self.outgoing(u).find(|&(to, _)| to == v).map(|(_, w)| w) {
                total += w;
            }
        }
        total
    }
}
