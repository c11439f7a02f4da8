pub mod adjacency;
pub mod client;
pub mod error;
pub mod graph;
pub mod io;
pub mod vehicle;
pub mod warehouse;

/// Vertex identifier. Client vertices occupy `1..=num_clients`, warehouse
/// vertices occupy `-(num_warehouses - 1)..=0`.
pub type VertexId = i32;

/// Edge weight between two vertices.
pub type Weight = f64;
