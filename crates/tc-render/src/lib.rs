//! `tc-render` — draws the transit network as an SVG map.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`svg`]       | `Document`, `Circle`, `Polyline`, `Text`, `Color`, `Point` |
//! | [`projector`] | `SphereProjector` (lat/lon → canvas coordinates)           |
//! | [`settings`]  | `RenderSettings` as read from the build document           |
//! | [`renderer`]  | `MapRenderer`                                              |
//! | [`error`]     | `RenderError`, `RenderResult<T>`                           |
//!
//! # Draw order
//!
//! Route lines, route labels, stop circles, stop labels.  Later shapes paint
//! over earlier ones, so labels always stay legible.

pub mod error;
pub mod projector;
pub mod renderer;
pub mod settings;
pub mod svg;

#[cfg(test)]
mod tests;

pub use error::{RenderError, RenderResult};
pub use projector::SphereProjector;
pub use renderer::MapRenderer;
pub use settings::RenderSettings;
pub use svg::{Circle, Color, Document, Point, Polyline, Shape, Text};
