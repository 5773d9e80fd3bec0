//! Snapshot files.
//!
//! Writes go to a temporary file in the destination directory, are synced,
//! and are then renamed over the target, so a reader sees either the old
//! file or the complete new one.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use tc_index::TransitIndex;

use crate::{codec, SnapshotResult};

/// Atomically write `index` to `path`.  Returns the number of bytes written.
pub fn write_snapshot(path: &Path, index: &TransitIndex) -> SnapshotResult<usize> {
    let bytes = codec::encode(index);

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    info!("snapshot written to {}: {} bytes", path.display(), bytes.len());
    Ok(bytes.len())
}

/// Read and fully validate the snapshot at `path`.
pub fn read_snapshot(path: &Path) -> SnapshotResult<TransitIndex> {
    let bytes = fs::read(path)?;
    info!("snapshot read from {}: {} bytes", path.display(), bytes.len());
    codec::decode(&bytes)
}
