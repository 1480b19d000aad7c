use thiserror::Error;

use common::error::Error as RouteSolverError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    ConfigLoad(String),

    #[error("The map contains no vertices.")]
    EmptyMap,

    #[error("Route planning failed: {0}")]
    Route(#[from] RouteSolverError),
}
