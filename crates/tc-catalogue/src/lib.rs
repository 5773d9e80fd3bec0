//! `tc-catalogue` — the entity catalogue and road-distance table.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`entities`]  | `Stop`, `Route`, `RouteKind`, `mirror_out_and_back`       |
//! | [`distance`]  | `DistanceTable` (ordered-pair lookup with reverse fallback) |
//! | [`catalogue`] | `Catalogue` arena, name lookup, stop→routes membership    |
//! | [`stats`]     | `RouteStats`, `StopStats`                                 |
//! | [`error`]     | `CatalogueError`, `CatalogueResult<T>`                    |

pub mod catalogue;
pub mod distance;
pub mod entities;
pub mod error;
pub mod stats;


pub use catalogue::Catalogue;
pub use distance::DistanceTable;
pub use entities::{mirror_out_and_back, Route, RouteKind, Stop};
pub use error::{CatalogueError, CatalogueResult};
pub use stats::{RouteStats, StopStats};
