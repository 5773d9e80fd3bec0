//! Routing-subsystem error type.

use thiserror::Error;

use tc_core::{EdgeId, VertexId};

/// Errors produced by `tc-router`.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: VertexId, to: VertexId },

    #[error("vertex {0} not found in graph")]
    VertexNotFound(VertexId),

    /// An edge id with no edge or no metadata behind it.  Always a bug in
    /// the caller, never a data condition.
    #[error("edge {0} not found in graph")]
    EdgeNotFound(EdgeId),

    #[error("inconsistent routing graph: {0}")]
    Inconsistent(String),
}

pub type RouterResult<T> = Result<T, RouterError>;
