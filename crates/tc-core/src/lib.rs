//! `tc-core` — foundational types for the transit index workspace.
//!
//! This crate is a dependency of every other `tc-*` crate.  It intentionally
//! has no `tc-*` dependencies and minimal external ones (`thiserror`, and
//! `serde` for the routing settings block).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `StopId`, `RouteId`, `VertexId`, `EdgeId`             |
//! | [`geo`]         | `GeoPoint`, great-circle distance                     |
//! | [`settings`]    | `RoutingSettings` (boarding wait, route speed)        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod error;
pub mod geo;
pub mod ids;
pub mod settings;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, RouteId, StopId, VertexId};
pub use settings::RoutingSettings;
