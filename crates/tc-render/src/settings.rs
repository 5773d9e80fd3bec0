//! Map appearance, as given in the `render_settings` block of the build
//! document and persisted unchanged in the snapshot.

use serde::{Deserialize, Serialize};

use crate::{Color, Point, RenderError, RenderResult};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub width:                f64,
    pub height:               f64,
    pub padding:              f64,
    pub line_width:           f64,
    pub stop_radius:          f64,
    pub bus_label_font_size:  u32,
    pub bus_label_offset:     Point,
    pub stop_label_font_size: u32,
    pub stop_label_offset:    Point,
    pub underlayer_color:     Color,
    pub underlayer_width:     f64,
    /// Route colours, assigned in route-name order and reused cyclically.
    pub color_palette:        Vec<Color>,
}

impl RenderSettings {
    /// Reject settings that cannot produce a sensible map.
    pub fn validate(&self) -> RenderResult<()> {
        for (name, v) in [
            ("width", self.width),
            ("height", self.height),
            ("padding", self.padding),
            ("line_width", self.line_width),
            ("stop_radius", self.stop_radius),
            ("underlayer_width", self.underlayer_width),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(RenderError::Settings(format!(
                    "{name} must be a non-negative number, got {v}"
                )));
            }
        }
        if 2.0 * self.padding > self.width.min(self.height) {
            return Err(RenderError::Settings(format!(
                "padding {} leaves no room on a {}x{} canvas",
                self.padding, self.width, self.height
            )));
        }
        let bad_opacity = std::iter::once(&self.underlayer_color)
            .chain(&self.color_palette)
            .find(|c| matches!(c, Color::Rgba(.., a) if !(0.0..=1.0).contains(a)));
        if let Some(c) = bad_opacity {
            return Err(RenderError::Settings(format!("opacity out of range in {c}")));
        }
        Ok(())
    }

    /// Palette colour of the `i`-th route, or [`Color::None`] with an empty
    /// palette.
    pub fn route_color(&self, i: usize) -> Color {
        if self.color_palette.is_empty() {
            Color::None
        } else {
            self.color_palette[i % self.color_palette.len()].clone()
        }
    }
}
