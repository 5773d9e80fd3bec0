//! Catalogue error type.

use thiserror::Error;

/// Referential-integrity violations raised while populating a [`Catalogue`].
///
/// Lookups of unknown names are *not* errors; they return `None`.
///
/// [`Catalogue`]: crate::Catalogue
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("{context} references unknown stop {name:?}")]
    UnknownStop { name: String, context: String },

    #[error("route {0:?} has no stops")]
    EmptyRoute(String),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
