//! Persisted records.
//!
//! These mirror the live types field for field but reference stops and
//! routes by name, so the payload never depends on arena numbering.

use bitcode::{Decode, Encode};

use tc_render::{Color, Point, RenderSettings};

#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct IndexDto {
    pub stops:         Vec<StopDto>,
    pub routes:        Vec<RouteDto>,
    pub distances:     Vec<DistanceDto>,
    pub render:        RenderDto,
    pub routing:       RoutingDto,
    pub graph:         GraphDto,
    pub stop_vertices: Vec<StopVertexDto>,
    /// Indexed by edge id.
    pub edge_info:     Vec<EdgeInfoDto>,
}

#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct StopDto {
    pub name: String,
    pub lat:  f64,
    pub lon:  f64,
}

#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct RouteDto {
    pub name:            String,
    /// Stored sequence; already mirrored for out-and-back routes.
    pub stops:           Vec<String>,
    pub is_roundtrip:    bool,
    pub second_terminal: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct DistanceDto {
    pub from:   String,
    pub to:     String,
    pub metres: u32,
}

#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct RoutingDto {
    pub bus_wait_time: u32,
    pub bus_velocity:  f64,
}

#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct EdgeDto {
    pub from:   u32,
    pub to:     u32,
    pub weight: f64,
}

#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct GraphDto {
    pub edges:     Vec<EdgeDto>,
    /// Outgoing edge ids of each vertex.  Length = vertex count.
    pub incidence: Vec<Vec<u32>>,
}

#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct StopVertexDto {
    pub stop:   String,
    pub vertex: u32,
}

#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub enum EdgeInfoDto {
    Wait { stop: String },
    Ride { route: String, span_count: u32 },
}

// ── Render settings ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub enum ColorDto {
    None,
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl From<&Color> for ColorDto {
    fn from(c: &Color) -> Self {
        match c {
            Color::None => ColorDto::None,
            Color::Named(s) => ColorDto::Named(s.clone()),
            Color::Rgb(r, g, b) => ColorDto::Rgb(*r, *g, *b),
            Color::Rgba(r, g, b, a) => ColorDto::Rgba(*r, *g, *b, *a),
        }
    }
}

impl From<ColorDto> for Color {
    fn from(c: ColorDto) -> Self {
        match c {
            ColorDto::None => Color::None,
            ColorDto::Named(s) => Color::Named(s),
            ColorDto::Rgb(r, g, b) => Color::Rgb(r, g, b),
            ColorDto::Rgba(r, g, b, a) => Color::Rgba(r, g, b, a),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct RenderDto {
    pub width:                f64,
    pub height:               f64,
    pub padding:              f64,
    pub line_width:           f64,
    pub stop_radius:          f64,
    pub bus_label_font_size:  u32,
    pub bus_label_offset:     [f64; 2],
    pub stop_label_font_size: u32,
    pub stop_label_offset:    [f64; 2],
    pub underlayer_color:     ColorDto,
    pub underlayer_width:     f64,
    pub color_palette:        Vec<ColorDto>,
}

impl From<&RenderSettings> for RenderDto {
    fn from(s: &RenderSettings) -> Self {
        Self {
            width:                s.width,
            height:               s.height,
            padding:              s.padding,
            line_width:           s.line_width,
            stop_radius:          s.stop_radius,
            bus_label_font_size:  s.bus_label_font_size,
            bus_label_offset:     s.bus_label_offset.into(),
            stop_label_font_size: s.stop_label_font_size,
            stop_label_offset:    s.stop_label_offset.into(),
            underlayer_color:     (&s.underlayer_color).into(),
            underlayer_width:     s.underlayer_width,
            color_palette:        s.color_palette.iter().map(ColorDto::from).collect(),
        }
    }
}

impl From<RenderDto> for RenderSettings {
    fn from(d: RenderDto) -> Self {
        Self {
            width:                d.width,
            height:               d.height,
            padding:              d.padding,
            line_width:           d.line_width,
            stop_radius:          d.stop_radius,
            bus_label_font_size:  d.bus_label_font_size,
            bus_label_offset:     Point::from(d.bus_label_offset),
            stop_label_font_size: d.stop_label_font_size,
            stop_label_offset:    Point::from(d.stop_label_offset),
            underlayer_color:     d.underlayer_color.into(),
            underlayer_width:     d.underlayer_width,
            color_palette:        d.color_palette.into_iter().map(Color::from).collect(),
        }
    }
}
