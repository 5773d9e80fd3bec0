//! Network map renderer.
//!
//! Routes are drawn in name order, so palette colours are stable across
//! builds regardless of input order.  Only stops served by at least one route
//! appear on the map, and only those stops feed the projection.

use std::collections::BTreeMap;

use log::debug;

use tc_catalogue::{Catalogue, Route, RouteKind};
use tc_core::GeoPoint;

use crate::{
    Circle, Color, Document, Point, Polyline, RenderSettings, SphereProjector,
    Text,
};

const FONT_FAMILY: &str = "Verdana";

/// Text geometry shared by a label and its underlayer.
struct Label<'w> {
    offset:    Point,
    font_size: u32,
    weight:    Option<&'w str>,
}

pub struct MapRenderer<'a> {
    catalogue: &'a Catalogue,
    settings:  &'a RenderSettings,
}

impl<'a> MapRenderer<'a> {
    pub fn new(catalogue: &'a Catalogue, settings: &'a RenderSettings) -> Self {
        Self { catalogue, settings }
    }

    /// Render the map as an SVG string.
    pub fn render_svg(&self) -> String {
        self.render().to_string()
    }

    /// Build the full map document.
    pub fn render(&self) -> Document {
        let mut routes: Vec<&Route> = self.catalogue.routes().map(|(_, r)| r).collect();
        routes.sort_by(|a, b| a.name.cmp(&b.name));

        // Served stops, keyed (and therefore drawn) by name.
        let mut stops: BTreeMap<&str, GeoPoint> = BTreeMap::new();
        for route in &routes {
            for &id in &route.stops {
                let stop = self.catalogue.stop(id);
                stops.insert(stop.name.as_str(), stop.pos);
            }
        }

        let points: Vec<GeoPoint> = stops.values().copied().collect();
        let s = self.settings;
        let proj = SphereProjector::new(&points, s.width, s.height, s.padding);

        let mut doc = Document::new();
        self.draw_lines(&mut doc, &routes, &proj);
        self.draw_route_labels(&mut doc, &routes, &proj);
        for &pos in stops.values() {
            doc.add(Circle::new(proj.project(pos), s.stop_radius).fill("white"));
        }
        for (&name, &pos) in &stops {
            let label = Label {
                offset:    s.stop_label_offset,
                font_size: s.stop_label_font_size,
                weight:    None,
            };
            self.draw_underlayer(&mut doc, proj.project(pos), name, &label);
            doc.add(
                Text::new(proj.project(pos), name)
                    .offset(s.stop_label_offset)
                    .font_size(s.stop_label_font_size)
                    .font_family(FONT_FAMILY)
                    .fill("black"),
            );
        }

        debug!(
            "map rendered: {} routes, {} stops, {} shapes",
            routes.len(),
            stops.len(),
            doc.len()
        );
        doc
    }

    fn draw_lines(&self, doc: &mut Document, routes: &[&Route], proj: &SphereProjector) {
        for (i, route) in routes.iter().enumerate() {
            let line: Polyline = route
                .stops
                .iter()
                .map(|&id| proj.project(self.catalogue.stop(id).pos))
                .collect();
            doc.add(
                line.stroke(self.settings.route_color(i))
                    .fill(Color::None)
                    .stroke_width(self.settings.line_width)
                    .round_ends(),
            );
        }
    }

    fn draw_route_labels(&self, doc: &mut Document, routes: &[&Route], proj: &SphereProjector) {
        let s = self.settings;
        for (i, route) in routes.iter().enumerate() {
            let color = s.route_color(i);
            let first = route.first_stop();
            let mut anchors = vec![first];
            if route.kind == RouteKind::OutAndBack {
                if let Some(terminal) = route.second_terminal.filter(|&t| t != first) {
                    anchors.push(terminal);
                }
            }

            for stop in anchors {
                let at = proj.project(self.catalogue.stop(stop).pos);
                let label = Label {
                    offset:    s.bus_label_offset,
                    font_size: s.bus_label_font_size,
                    weight:    Some("bold"),
                };
                self.draw_underlayer(doc, at, &route.name, &label);
                doc.add(
                    Text::new(at, route.name.as_str())
                        .offset(s.bus_label_offset)
                        .font_size(s.bus_label_font_size)
                        .font_family(FONT_FAMILY)
                        .font_weight("bold")
                        .fill(color.clone()),
                );
            }
        }
    }

    /// Halo drawn beneath a label in the underlayer colour.
    fn draw_underlayer(&self, doc: &mut Document, at: Point, data: &str, label: &Label<'_>) {
        let s = self.settings;
        let mut halo = Text::new(at, data)
            .offset(label.offset)
            .font_size(label.font_size)
            .font_family(FONT_FAMILY)
            .fill(s.underlayer_color.clone())
            .stroke(s.underlayer_color.clone())
            .stroke_width(s.underlayer_width)
            .round_ends();
        if let Some(weight) = label.weight {
            halo = halo.font_weight(weight);
        }
        doc.add(halo);
    }
}
