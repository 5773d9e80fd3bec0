//! Fixed-size snapshot header: magic, format version, payload length, and
//! an xxHash32 checksum of the payload.

use xxhash_rust::xxh32::xxh32;

use crate::{SnapshotError, SnapshotResult};

/// "TCIX".
pub const MAGIC: [u8; 4] = *b"TCIX";

/// Bumped whenever the payload schema changes.  Readers accept exactly
/// this version.
pub const FORMAT_VERSION: u32 = 1;

pub const HEADER_SIZE: usize = 20;

const XXHASH_SEED: u32 = 0;

/// Prepend the header to an encoded payload.
pub fn wrap(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    out.extend_from_slice(&xxh32(payload, XXHASH_SEED).to_le_bytes());
    out.extend_from_slice(payload);
    out
}

/// Validate the header and return the payload it frames.
///
/// Checks, in order: length of the header itself, magic, version, payload
/// length, checksum.
pub fn unwrap(bytes: &[u8]) -> SnapshotResult<&[u8]> {
    if bytes.len() < HEADER_SIZE {
        return Err(SnapshotError::Truncated {
            len:  bytes.len() as u64,
            need: HEADER_SIZE as u64,
        });
    }
    if bytes[..4] != MAGIC {
        return Err(SnapshotError::BadMagic);
    }

    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if version != FORMAT_VERSION {
        return Err(SnapshotError::VersionMismatch { found: version, expected: FORMAT_VERSION });
    }

    let mut len = [0u8; 8];
    len.copy_from_slice(&bytes[8..16]);
    let declared = u64::from_le_bytes(len);
    let stored = u32::from_le_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);

    let payload = &bytes[HEADER_SIZE..];
    if payload.len() as u64 != declared {
        return Err(SnapshotError::Truncated {
            len:  bytes.len() as u64,
            need: HEADER_SIZE as u64 + declared,
        });
    }

    let computed = xxh32(payload, XXHASH_SEED);
    if computed != stored {
        return Err(SnapshotError::ChecksumMismatch { stored, computed });
    }
    Ok(payload)
}
