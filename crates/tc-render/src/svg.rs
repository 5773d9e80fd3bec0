//! Minimal SVG document model.
//!
//! Only the three primitives the map needs: circles, polylines, and text.
//! Shapes are built with consuming setters and collected into a
//! [`Document`], which renders through [`std::fmt::Display`].

use std::fmt::{self, Display, Formatter, Write as _};

use serde::{Deserialize, Serialize};

/// Canvas coordinate.  Deserialized from a two-element `[x, y]` array.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

// ── Color ─────────────────────────────────────────────────────────────────────

/// A paint value.
///
/// In the build document a colour is a string (`"red"`), a three-element
/// `[r, g, b]` array, or a four-element `[r, g, b, opacity]` array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
    #[default]
    None,
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::Named(s.to_owned())
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
            Color::None => f.write_str("none"),
        }
    }
}

// ── Paint attributes ──────────────────────────────────────────────────────────

/// Fill/stroke attributes shared by every shape.  Unset attributes are not
/// emitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paint {
    fill:         Option<Color>,
    stroke:       Option<Color>,
    stroke_width: Option<f64>,
    round_ends:   bool,
}

impl Display for Paint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(c) = &self.fill {
            write!(f, " fill=\"{c}\"")?;
        }
        if let Some(c) = &self.stroke {
            write!(f, " stroke=\"{c}\"")?;
        }
        if let Some(w) = self.stroke_width {
            write!(f, " stroke-width=\"{w}\"")?;
        }
        if self.round_ends {
            f.write_str(" stroke-linecap=\"round\" stroke-linejoin=\"round\"")?;
        }
        Ok(())
    }
}

/// Generates the consuming paint setters for a shape with a `paint` field.
macro_rules! paint_setters {
    ($t:ty) => {
        impl $t {
            pub fn fill(mut self, c: impl Into<Color>) -> Self {
                self.paint.fill = Some(c.into());
                self
            }
            pub fn stroke(mut self, c: impl Into<Color>) -> Self {
                self.paint.stroke = Some(c.into());
                self
            }
            pub fn stroke_width(mut self, w: f64) -> Self {
                self.paint.stroke_width = Some(w);
                self
            }
            /// Round line caps and joins.
            pub fn round_ends(mut self) -> Self {
                self.paint.round_ends = true;
                self
            }
        }
    };
}

// ── Shapes ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    paint:  Paint,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius, paint: Paint::default() }
    }
}
paint_setters!(Circle);

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
            self.center.x, self.center.y, self.radius, self.paint
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    paint:  Paint,
}

paint_setters!(Polyline);

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect(), paint: Paint::default() }
    }
}

impl Display for Polyline {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("<polyline points=\"")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{},{}", p.x, p.y)?;
        }
        write!(f, "\"{}/>", self.paint)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
    pos:         Point,
    offset:      Point,
    font_size:   u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    data:        String,
    paint:       Paint,
}

impl Text {
    pub fn new(pos: Point, data: impl Into<String>) -> Self {
        Self { pos, data: data.into(), font_size: 1, ..Self::default() }
    }

    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }
}
paint_setters!(Text);

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<text{} x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.paint, self.pos.x, self.pos.y, self.offset.x, self.offset.y, self.font_size
        )?;
        if let Some(family) = &self.font_family {
            write!(f, " font-family=\"{family}\"")?;
        }
        if let Some(weight) = &self.font_weight {
            write!(f, " font-weight=\"{weight}\"")?;
        }
        f.write_str(">")?;
        write_escaped(f, &self.data)?;
        f.write_str("</text>")
    }
}

/// XML-escape text content.
fn write_escaped(f: &mut Formatter<'_>, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&apos;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '&' => f.write_str("&amp;")?,
            other => f.write_char(other)?,
        }
    }
    Ok(())
}

// ── Document ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Polyline> for Shape {
    fn from(p: Polyline) -> Self {
        Shape::Polyline(p)
    }
}

impl From<Text> for Shape {
    fn from(t: Text) -> Self {
        Shape::Text(t)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => Display::fmt(c, f),
            Shape::Polyline(p) => Display::fmt(p, f),
            Shape::Text(t) => Display::fmt(t, f),
        }
    }
}

/// Ordered list of shapes; later shapes paint over earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n")?;
        f.write_str("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n")?;
        for shape in &self.shapes {
            writeln!(f, "  {shape}")?;
        }
        f.write_str("</svg>")
    }
}
