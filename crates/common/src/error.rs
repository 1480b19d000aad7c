use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A waypoint name that does not resolve to any vertex in the map.
    UnknownVertex(String),

    /// A route leg whose target cannot be reached from its start.
    UnreachableWaypoint { from: String, to: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownVertex(name) => {
                write!(f, "Vertex '{}' does not exist in the map.", name)
            }

            Error::UnreachableWaypoint { from, to } => {
                write!(f, "No route exists from '{}' to '{}'.", from, to)
            }
        }
    }
}

impl std::error::Error for Error {}
