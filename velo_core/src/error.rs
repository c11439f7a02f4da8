use thiserror::Error;

use crate::VertexId;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("graph must have at least two vertices")]
    TooFewVertices,
    #[error("graph must have at least one warehouse")]
    MissingWarehouse,
    #[error("graph must have at least one client vertex")]
    MissingClient,
    #[error("every warehouse needs at least one vehicle with positive capacity")]
    EmptyFleet,
    #[error("vehicle capacity must be positive, got {0}")]
    InvalidVehicleCapacity(i64),
    #[error("attempting to add self-loop edge on vertex {0}")]
    SelfLoopEdge(VertexId),
    #[error("attempting to add the existing edge between {u} and {v}")]
    DuplicateEdge { u: VertexId, v: VertexId },
    #[error("edge between {u} and {v} has non-positive weight {weight}")]
    NonPositiveWeight {
        u: VertexId,
        v: VertexId,
        weight: f64,
    },
    #[error("no edge found between {u} and {v}")]
    NoEdgeFound { u: VertexId, v: VertexId },
    #[error("graph is not complete: missing edge between {u} and {v}")]
    IncompleteGraph { u: VertexId, v: VertexId },
    #[error("vertex {0} is not a known client vertex")]
    UnknownVertex(VertexId),
    #[error("expected {expected} client records, found {found}")]
    ClientCountMismatch { expected: usize, found: usize },
    #[error("client {client} with demand {demand} cannot be served by any vehicle in the fleet")]
    InfeasibleClient { client: VertexId, demand: i64 },
    #[error("malformed record on line {line}: {content}")]
    MalformedRecord { line: usize, content: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
