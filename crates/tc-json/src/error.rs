//! Error types for tc-json.

use thiserror::Error;

use tc_catalogue::CatalogueError;
use tc_core::CoreError;
use tc_index::IndexError;
use tc_render::RenderError;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed input document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error("invalid routing settings: {0}")]
    Settings(#[from] CoreError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Index(#[from] IndexError),

    /// Unbalanced containers, a value where a key was expected, or the
    /// reverse.
    #[error("malformed output: {0}")]
    MalformedOutput(String),
}

pub type JsonResult<T> = Result<T, JsonError>;
