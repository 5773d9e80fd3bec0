//! Unit tests for tc-render.

#[cfg(test)]
mod helpers {
    use tc_catalogue::{mirror_out_and_back, Catalogue, RouteKind};
    use tc_core::GeoPoint;

    use crate::{Color, Point, RenderSettings};

    pub fn settings() -> RenderSettings {
        RenderSettings {
            width: 200.0,
            height: 200.0,
            padding: 10.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: Point::new(7.0, 15.0),
            stop_label_font_size: 18,
            stop_label_offset: Point::new(7.0, -3.0),
            underlayer_color: Color::Rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec![Color::from("green"), Color::Rgb(255, 160, 0)],
        }
    }

    /// Loop "Z" over West → East → West, out-and-back "A" West ↔ North, and an
    /// unserved stop "Lonely".
    pub fn network() -> Catalogue {
        let mut c = Catalogue::new();
        c.add_stop("West", GeoPoint::new(0.0, 0.0));
        c.add_stop("East", GeoPoint::new(0.0, 1.0));
        c.add_stop("North", GeoPoint::new(1.0, 0.0));
        c.add_stop("Lonely", GeoPoint::new(-5.0, -5.0));
        c.add_route("Z", &["West", "East", "West"], RouteKind::Loop, None).unwrap();
        let (full, terminal) = mirror_out_and_back(&["West", "North"]).unwrap();
        c.add_route("A", &full, RouteKind::OutAndBack, Some(terminal)).unwrap();
        c
    }
}

// ── SVG primitives ────────────────────────────────────────────────────────────

#[cfg(test)]
mod svg {
    use crate::{Circle, Color, Document, Point, Polyline, Text};

    #[test]
    fn colors() {
        assert_eq!(Color::None.to_string(), "none");
        assert_eq!(Color::from("red").to_string(), "red");
        assert_eq!(Color::Rgb(1, 2, 3).to_string(), "rgb(1,2,3)");
        assert_eq!(Color::Rgba(1, 2, 3, 0.5).to_string(), "rgba(1,2,3,0.5)");
    }

    #[test]
    fn color_input_forms() {
        let parsed: Vec<Color> =
            serde_json::from_str(r#"["red", [1, 2, 3], [4, 5, 6, 0.25]]"#).unwrap();
        assert_eq!(
            parsed,
            vec![Color::from("red"), Color::Rgb(1, 2, 3), Color::Rgba(4, 5, 6, 0.25)]
        );
    }

    #[test]
    fn circle_with_paint() {
        let c = Circle::new(Point::new(1.0, 2.5), 3.0).fill("white");
        assert_eq!(c.to_string(), r#"<circle cx="1" cy="2.5" r="3" fill="white"/>"#);
    }

    #[test]
    fn polyline_points_and_round_ends() {
        let p: Polyline = [Point::new(0.0, 0.0), Point::new(10.0, 5.0)].into_iter().collect();
        let p = p.stroke(Color::Rgb(0, 0, 0)).round_ends();
        assert_eq!(
            p.to_string(),
            r#"<polyline points="0,0 10,5" stroke="rgb(0,0,0)" stroke-linecap="round" stroke-linejoin="round"/>"#
        );
    }

    #[test]
    fn unset_paint_is_omitted() {
        let p: Polyline = [Point::new(1.0, 1.0)].into_iter().collect();
        assert_eq!(p.to_string(), r#"<polyline points="1,1"/>"#);
    }

    #[test]
    fn text_is_escaped() {
        let t = Text::new(Point::new(1.0, 1.0), r#"<Tom & "Jerry's">"#)
            .font_size(12)
            .font_family("Verdana");
        assert_eq!(
            t.to_string(),
            r#"<text x="1" y="1" dx="0" dy="0" font-size="12" font-family="Verdana">&lt;Tom &amp; &quot;Jerry&apos;s&quot;&gt;</text>"#
        );
    }

    #[test]
    fn document_envelope() {
        let mut doc = Document::new();
        doc.add(Circle::new(Point::default(), 1.0));
        let out = doc.to_string();
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<svg "));
        assert!(out.contains("\n  <circle "));
        assert!(out.ends_with("</svg>"));
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod projector {
    use tc_core::GeoPoint;

    use crate::{Point, SphereProjector};

    #[test]
    fn corners_land_on_padding() {
        let pts = [GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 2.0)];
        let p = SphereProjector::new(&pts, 220.0, 120.0, 10.0);
        // width zoom 200/2 = 100, height zoom 100/1 = 100.
        assert_eq!(p.zoom(), 100.0);
        assert_eq!(p.project(GeoPoint::new(1.0, 0.0)), Point::new(10.0, 10.0));
        assert_eq!(p.project(GeoPoint::new(0.0, 2.0)), Point::new(210.0, 110.0));
    }

    #[test]
    fn smaller_zoom_wins() {
        let pts = [GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)];
        let p = SphereProjector::new(&pts, 100.0, 300.0, 0.0);
        assert_eq!(p.zoom(), 100.0);
    }

    #[test]
    fn degenerate_axis_is_ignored() {
        let pts = [GeoPoint::new(5.0, 0.0), GeoPoint::new(5.0, 4.0)];
        let p = SphereProjector::new(&pts, 100.0, 100.0, 10.0);
        assert_eq!(p.zoom(), 20.0);
    }

    #[test]
    fn empty_and_single_point() {
        let p = SphereProjector::new(&[], 100.0, 100.0, 7.0);
        assert_eq!(p.project(GeoPoint::new(3.0, 3.0)), Point::new(7.0, 7.0));

        let p = SphereProjector::new(&[GeoPoint::new(3.0, 3.0)], 100.0, 100.0, 7.0);
        assert_eq!(p.zoom(), 0.0);
        assert_eq!(p.project(GeoPoint::new(3.0, 3.0)), Point::new(7.0, 7.0));
    }
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod settings {
    use crate::{Color, RenderSettings};

    #[test]
    fn parses_build_document_block() {
        let json = r#"{
            "width": 600, "height": 400, "padding": 50,
            "line_width": 14, "stop_radius": 5,
            "bus_label_font_size": 20, "bus_label_offset": [7, 15],
            "stop_label_font_size": 20, "stop_label_offset": [7, -3],
            "underlayer_color": [255, 255, 255, 0.85], "underlayer_width": 3,
            "color_palette": ["green", [255, 160, 0], "red"]
        }"#;
        let s: RenderSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.width, 600.0);
        assert_eq!(s.stop_label_offset.y, -3.0);
        assert_eq!(s.underlayer_color, Color::Rgba(255, 255, 255, 0.85));
        assert_eq!(s.color_palette.len(), 3);
        s.validate().unwrap();
    }

    #[test]
    fn palette_cycles() {
        let s = super::helpers::settings();
        assert_eq!(s.route_color(0), Color::from("green"));
        assert_eq!(s.route_color(3), Color::Rgb(255, 160, 0));
        let empty = RenderSettings { color_palette: vec![], ..s };
        assert_eq!(empty.route_color(5), Color::None);
    }

    #[test]
    fn rejects_oversized_padding_and_bad_opacity() {
        let s = super::helpers::settings();
        let padded = RenderSettings { padding: 150.0, ..s.clone() };
        assert!(padded.validate().is_err());
        let opaque = RenderSettings { underlayer_color: Color::Rgba(0, 0, 0, 1.5), ..s };
        assert!(opaque.validate().is_err());
    }
}

// ── Map renderer ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod renderer {
    use crate::{MapRenderer, Shape};

    #[test]
    fn draw_order_and_counts() {
        let c = super::helpers::network();
        let s = super::helpers::settings();
        let doc = MapRenderer::new(&c, &s).render();

        let kinds: Vec<&str> = doc
            .shapes()
            .iter()
            .map(|sh| match sh {
                Shape::Polyline(_) => "line",
                Shape::Text(_) => "text",
                Shape::Circle(_) => "circle",
            })
            .collect();
        // 2 lines; labels: A twice (out-and-back) + Z once, 2 shapes each;
        // 3 served stops: circles, then 2 texts each.
        let expected: Vec<&str> = std::iter::repeat("line")
            .take(2)
            .chain(std::iter::repeat("text").take(6))
            .chain(std::iter::repeat("circle").take(3))
            .chain(std::iter::repeat("text").take(6))
            .collect();
        assert_eq!(kinds, expected);
    }

    #[test]
    fn routes_sorted_by_name_take_palette_in_order() {
        let c = super::helpers::network();
        let s = super::helpers::settings();
        let svg = MapRenderer::new(&c, &s).render_svg();
        let green = svg.find(r#"stroke="green""#).unwrap();
        let orange = svg.find(r#"stroke="rgb(255,160,0)""#).unwrap();
        assert!(green < orange, "route A must be drawn first");
    }

    #[test]
    fn unserved_stop_is_not_drawn() {
        let c = super::helpers::network();
        let s = super::helpers::settings();
        let svg = MapRenderer::new(&c, &s).render_svg();
        assert!(!svg.contains("Lonely"));
        assert!(svg.contains(">North</text>"));
    }

    #[test]
    fn empty_catalogue_renders_empty_document() {
        let c = tc_catalogue::Catalogue::new();
        let s = super::helpers::settings();
        let doc = MapRenderer::new(&c, &s).render();
        assert!(doc.is_empty());
        assert!(doc.to_string().ends_with("</svg>"));
    }
}
