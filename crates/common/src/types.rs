/// Handle into a graph's vertex table.
pub type VertexId = usize;

/// Handle into a graph's edge arena.
pub type EdgeId = usize;

/// Category tag assigned to each map location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexKind {
    #[default]
    Normal,
    Pickup,
    Dropoff,
    Garage,
}

impl VertexKind {
    /// Parses the tag column of a vertices file. Unknown tags map to `None`;
    /// the loader treats them as `Normal`.
    pub fn parse(tag: &str) -> Option<VertexKind> {
        match tag {
            "normal" => Some(VertexKind::Normal),
            "pickup" => Some(VertexKind::Pickup),
            "dropoff" => Some(VertexKind::Dropoff),
            "garage" => Some(VertexKind::Garage),
            _ => None,
        }
    }
}

/// A map location. Algorithm state (distance, parent, visited) deliberately
/// does not live here: each run owns its own state table keyed by `VertexId`,
/// so unrelated runs cannot observe each other's scratch work.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Grid position on the rendered map; unused by the engines.
    pub map_row: i32,
    pub map_col: i32,
    pub kind: VertexKind,
}

impl Vertex {
    pub fn new(name: impl Into<String>) -> Self {
        Vertex {
            name: name.into(),
            latitude: 0.0,
            longitude: 0.0,
            map_row: 0,
            map_col: 0,
            kind: VertexKind::Normal,
        }
    }

    pub fn with_kind(mut self, kind: VertexKind) -> Self {
        self.kind = kind;
        self
    }
}

/// A weighted edge between two vertices. In the distance graph a single arena
/// edge is registered on both endpoints and traversal derives the far side;
/// in the profit graph it is directed `from -> to` and may carry a negative
/// weight (negative = profit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

impl Edge {
    /// The endpoint that is not `v`. Used when walking undirected adjacency.
    pub fn other(&self, v: VertexId) -> VertexId {
        if self.from == v { self.to } else { self.from }
    }
}

/// One leg of a stitched route: the full vertex path of a single
/// shortest-path run and its distance.
#[derive(Debug, Clone)]
pub struct RouteLeg {
    pub path: Vec<VertexId>,
    pub distance: f64,
}

/// A complete delivery route: `garage -> w1 -> ... -> wk -> garage`, one leg
/// per consecutive pair, each computed by an independent shortest-path run.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    pub legs: Vec<RouteLeg>,
    pub total_distance: f64,
}

impl RoutePlan {
    /// Cost of driving the route at the given per-unit rate.
    pub fn travel_cost(&self, per_unit: f64) -> f64 {
        self.total_distance * per_unit
    }
}
