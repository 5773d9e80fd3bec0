//! Error types for tc-index.

use thiserror::Error;

use tc_router::RouterError;

/// Internal-consistency failures.  Not-found lookups are ordinary `None`
/// results and never appear here.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Restored parts do not describe one coherent index.
    #[error("inconsistent index: {0}")]
    Inconsistent(String),

    /// A malformed vertex or edge reference reached the router.
    #[error(transparent)]
    Router(#[from] RouterError),
}

pub type IndexResult<T> = Result<T, IndexError>;
