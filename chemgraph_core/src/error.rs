//! Error types for graph construction and mutation.

use thiserror::Error;

use crate::graph::{ElementRef, VertexId};

/// Errors raised by [`Graph`](crate::Graph) operations.
///
/// These indicate a caller bug (an id from another graph, a malformed
/// bond) and abort the operation without modifying the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex or edge id does not belong to this graph.
    #[error("Invalid reference: {0} is not part of this graph")]
    InvalidReference(ElementRef),

    /// An edge was requested from a vertex to itself.
    #[error("Self loop on {0} is not allowed")]
    SelfLoop(VertexId),

    /// An edge already connects the two vertices.
    #[error("Duplicate edge: {0} and {1} are already connected")]
    DuplicateEdge(VertexId, VertexId),

    /// An atom type symbol could not be parsed.
    #[error("Unknown atom type: {0:?}")]
    UnknownAtomType(String),

    /// A bond order symbol could not be parsed.
    #[error("Unknown bond order: {0:?}")]
    UnknownBondOrder(String),
}

impl GraphError {
    /// Create an invalid reference error for a vertex.
    pub fn invalid_vertex(v: VertexId) -> Self {
        Self::InvalidReference(ElementRef::Vertex(v))
    }

    /// Create an invalid reference error for an edge.
    pub fn invalid_edge(e: crate::EdgeId) -> Self {
        Self::InvalidReference(ElementRef::Edge(e))
    }
}
