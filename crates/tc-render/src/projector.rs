//! Geographic → canvas projection.
//!
//! Longitude maps to `x` and latitude to `y` (north up), both scaled by one
//! zoom factor so the map keeps its aspect ratio.  The zoom is the largest
//! factor that fits the bounding box of all points inside the canvas minus
//! padding; an axis whose extent is (near) zero does not constrain it.

use rstar::AABB;

use tc_core::GeoPoint;

use crate::Point;

/// Extents below this are treated as zero.
pub const EPSILON: f64 = 1e-6;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereProjector {
    padding: f64,
    min_lon: f64,
    max_lat: f64,
    zoom:    f64,
}

impl SphereProjector {
    /// Fit `points` into a `max_width` × `max_height` canvas.
    ///
    /// With no points, or all points coincident, every point projects to
    /// `(padding, padding)`.
    pub fn new(points: &[GeoPoint], max_width: f64, max_height: f64, padding: f64) -> Self {
        let mut proj = Self { padding, min_lon: 0.0, max_lat: 0.0, zoom: 0.0 };
        if points.is_empty() {
            return proj;
        }

        let corners: Vec<[f64; 2]> = points.iter().map(|p| [p.lon, p.lat]).collect();
        let bbox = AABB::from_points(&corners);
        let [min_lon, min_lat] = bbox.lower();
        let [max_lon, max_lat] = bbox.upper();
        proj.min_lon = min_lon;
        proj.max_lat = max_lat;

        let width_zoom = (!is_zero(max_lon - min_lon))
            .then(|| (max_width - 2.0 * padding) / (max_lon - min_lon));
        let height_zoom = (!is_zero(max_lat - min_lat))
            .then(|| (max_height - 2.0 * padding) / (max_lat - min_lat));

        proj.zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(z), None) | (None, Some(z)) => z,
            (None, None) => 0.0,
        };
        proj
    }

    pub fn project(&self, p: GeoPoint) -> Point {
        Point::new(
            (p.lon - self.min_lon) * self.zoom + self.padding,
            (self.max_lat - p.lat) * self.zoom + self.padding,
        )
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

fn is_zero(v: f64) -> bool {
    v.abs() < EPSILON
}
