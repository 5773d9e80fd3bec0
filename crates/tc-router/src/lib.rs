//! `tc-router` — routing graph, graph builder, and shortest-path search.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `TransitGraph` (edge list + CSR incidence), `TransitGraphBuilder` |
//! | [`router`]  | `Router` trait, `Path`, `DijkstraRouter`                    |
//! | [`builder`] | `GraphBuilder`, `RoutingGraph`, `EdgeInfo`                  |
//! | [`error`]   | `RouterError`, `RouterResult<T>`                            |
//!
//! # Vertex layout
//!
//! Stop `i` (arena order) owns vertices `2i` (wait-entry) and `2i + 1`
//! (wait-exit).  A Wait edge joins the pair; Ride edges leave a wait-exit
//! and arrive at a wait-entry, so every itinerary alternates Wait and Ride.

pub mod builder;
pub mod error;
pub mod graph;
pub mod router;

#[cfg(test)]
mod tests;

pub use builder::{EdgeInfo, GraphBuilder, RoutingGraph};
pub use error::{RouterError, RouterResult};
pub use graph::{Edge, TransitGraph, TransitGraphBuilder};
pub use router::{DijkstraRouter, Path, Router};
