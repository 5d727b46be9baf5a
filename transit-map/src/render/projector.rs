//! Projection of geographic coordinates onto the canvas.

use crate::domain::Coordinates;
use crate::svg::Point;

/// Spans narrower than this (in degrees) do not constrain the zoom.
const EPSILON: f64 = 1e-6;

/// Equirectangular projection fitted to a set of points.
///
/// Longitude grows to the right, latitude grows upwards (so screen `y` is
/// flipped). The zoom is the largest factor that fits every input point
/// inside the padded canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereProjector {
    padding: f64,
    min_lon: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    /// Fit a projector to `points` for a `max_width` × `max_height` canvas.
    ///
    /// With no points, or all points within [`EPSILON`] of each other, the
    /// zoom is 0 and everything lands at `(padding, padding)`.
    pub fn new<I>(points: I, max_width: f64, max_height: f64, padding: f64) -> Self
    where
        I: IntoIterator<Item = Coordinates>,
    {
        let mut points = points.into_iter();

        let Some(first) = points.next() else {
            return Self {
                padding,
                min_lon: 0.0,
                max_lat: 0.0,
                zoom: 0.0,
            };
        };

        let (mut min_lon, mut max_lon) = (first.lng, first.lng);
        let (mut min_lat, mut max_lat) = (first.lat, first.lat);
        for p in points {
            min_lon = min_lon.min(p.lng);
            max_lon = max_lon.max(p.lng);
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
        }

        let lon_span = max_lon - min_lon;
        let lat_span = max_lat - min_lat;

        let width_zoom =
            (lon_span.abs() >= EPSILON).then(|| (max_width - 2.0 * padding) / lon_span);
        // Guarded by the longitude span, not the latitude span: reference
        // maps are rendered this way and must match byte-for-byte.
        let height_zoom =
            (lon_span.abs() >= EPSILON).then(|| (max_height - 2.0 * padding) / lat_span);

        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };

        Self {
            padding,
            min_lon,
            max_lat,
            zoom,
        }
    }

    /// Project a coordinate onto the canvas.
    pub fn project(&self, coordinates: Coordinates) -> Point {
        Point::new(
            (coordinates.lng - self.min_lon) * self.zoom + self.padding,
            (self.max_lat - coordinates.lat) * self.zoom + self.padding,
        )
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}
