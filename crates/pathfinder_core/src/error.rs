//! Error types of the search engine.
use thiserror::Error;

use crate::{
    constants::Weight,
    graph::{DefaultIdx, VertexIndex},
};

/// Convenient result alias for the search engine.
pub type Result<T> = std::result::Result<T, PathError>;

/// Top-level error type.
///
/// An unreachable target is not an error: searches report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Raised at the call boundary before any work is done.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// Raised when a search expanded more tracks than its configured budget.
    #[error("search aborted after expanding {limit} tracks")]
    ExpansionLimitReached { limit: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("vertex {0:?} does not exist")]
    UnknownVertex(VertexIndex<DefaultIdx>),

    #[error("vertex created for index {index} has the same payload as {existing:?}")]
    DuplicateVertex {
        index: usize,
        existing: VertexIndex<DefaultIdx>,
    },

    #[error("coefficient {0} is outside of [0, 1]")]
    InvalidCoefficient(f64),

    #[error("no heuristic supplied")]
    MissingHeuristic,

    /// Negative or non-finite weights would break the closed set dedup.
    #[error("edge {from:?} -> {to:?} has unsupported weight {weight}")]
    InvalidEdgeWeight {
        from: VertexIndex<DefaultIdx>,
        to: VertexIndex<DefaultIdx>,
        weight: Weight,
    },
}
