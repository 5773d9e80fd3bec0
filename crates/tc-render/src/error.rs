//! Error types for tc-render.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render settings: {0}")]
    Settings(String),
}

/// Alias for `Result<T, RenderError>`.
pub type RenderResult<T> = Result<T, RenderError>;
