//! Error types for tc-snapshot.
//!
//! Every variant is fatal to the load: no partially restored index is ever
//! returned.

use thiserror::Error;

use tc_catalogue::CatalogueError;
use tc_core::CoreError;
use tc_index::IndexError;
use tc_render::RenderError;
use tc_router::RouterError;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a transit index snapshot (bad magic bytes)")]
    BadMagic,

    #[error("snapshot format version {found} is not supported (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("snapshot truncated: {len} bytes, need {need}")]
    Truncated { len: u64, need: u64 },

    #[error("snapshot checksum mismatch (stored {stored:#010x}, computed {computed:#010x})")]
    ChecksumMismatch { stored: u32, computed: u32 },

    #[error("snapshot payload could not be decoded: {0}")]
    Payload(#[from] bitcode::Error),

    #[error("snapshot violates catalogue invariants: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error("snapshot graph is malformed: {0}")]
    Router(#[from] RouterError),

    #[error("snapshot does not form a coherent index: {0}")]
    Index(#[from] IndexError),

    #[error("snapshot routing settings are invalid: {0}")]
    Settings(#[from] CoreError),

    #[error("snapshot render settings are invalid: {0}")]
    Render(#[from] RenderError),

    #[error("snapshot is inconsistent: {0}")]
    Inconsistent(String),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;
