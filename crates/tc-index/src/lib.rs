//! `tc-index` — the transit index and its query engine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`index`]  | `TransitIndex`: catalogue + routing graph + render settings |
//! | [`query`]  | `QueryEngine`, `Itinerary`, `Leg`, `LegDetail`              |
//! | [`error`]  | `IndexError`, `IndexResult<T>`                              |
//!
//! # Lifecycle
//!
//! A `TransitIndex` is either built from a populated catalogue (running the
//! graph builder) or assembled from restored parts by the snapshot codec.
//! Either way it is immutable afterwards; a `QueryEngine` only borrows it.

pub mod error;
pub mod index;
pub mod query;


pub use error::{IndexError, IndexResult};
pub use index::TransitIndex;
pub use query::{Itinerary, Leg, LegDetail, QueryEngine};
