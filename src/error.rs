//! Error types for graph construction and search.

use thiserror::Error;

use crate::graphs::VertexId;

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while building or searching a graph
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GraphError {
    /// An edge references a vertex outside of `[0, number_of_vertices)`
    #[error("edge {tail} -> {head} has an endpoint outside of [0, {number_of_vertices})")]
    InvalidEndpoint {
        tail: VertexId,
        head: VertexId,
        number_of_vertices: u32,
    },

    /// The search source lies outside of `[0, number_of_vertices)`
    #[error("source {vertex} is outside of [0, {number_of_vertices})")]
    InvalidSource {
        vertex: VertexId,
        number_of_vertices: u32,
    },

    /// The adjacency entries would not fit into `u32` offsets
    #[error("{number_of_edges} edges (directed: {directed}) exceed u32::MAX adjacency entries")]
    TooManyEdges { number_of_edges: usize, directed: bool },

    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed `.fmi` content
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
