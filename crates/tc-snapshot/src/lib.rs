//! `tc-snapshot` — persist a [`TransitIndex`] as one binary file and load it
//! back without re-running the graph builder.
//!
//! # File layout (little-endian)
//!
//! ```text
//! [0..4]    magic "TCIX"
//! [4..8]    format version (u32)
//! [8..16]   payload length in bytes (u64)
//! [16..20]  xxHash32 of the payload (u32)
//! [20..]    bitcode-encoded payload
//! ```
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`header`] | magic, version, length and checksum framing              |
//! | [`dto`]    | bitcode records mirroring every persisted field          |
//! | [`codec`]  | `encode` / `decode` between `TransitIndex` and bytes     |
//! | [`io`]     | `write_snapshot` (atomic) / `read_snapshot`              |
//! | [`error`]  | `SnapshotError`, `SnapshotResult<T>`                     |
//!
//! Entities are referenced by *name* in the payload.  Decoding replays the
//! catalogue through its normal insertion API, so a payload that names a
//! missing stop fails exactly like bad build input would.
//!
//! [`TransitIndex`]: tc_index::TransitIndex

pub mod codec;
pub mod dto;
pub mod error;
pub mod header;
pub mod io;


pub use codec::{decode, encode};
pub use error::{SnapshotError, SnapshotResult};
pub use header::{FORMAT_VERSION, HEADER_SIZE, MAGIC};
pub use io::{read_snapshot, write_snapshot};
