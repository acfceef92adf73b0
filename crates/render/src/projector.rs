//! Projection of geographic coordinates onto a bounded canvas.

use geo::Point;

use crate::svg;

const EPSILON: f64 = 1e-6;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Maps longitude/latitude onto a `width` x `height` canvas with a `padding`
/// margin, using one uniform scale so relative geometry is preserved.
///
/// A dimension with no spread contributes no constraint on the scale; if
/// both dimensions are degenerate the scale is zero and every coordinate
/// lands on the padding corner. Latitude is flipped so north is up.
#[derive(Clone, Copy, Debug)]
pub struct SphereProjector {
    padding: f64,
    min_lon: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    pub fn new(
        points: impl IntoIterator<Item = Point>,
        max_width: f64,
        max_height: f64,
        padding: f64,
    ) -> Self {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        for point in points {
            let (lon, lat) = (point.x(), point.y());
            bounds = Some(match bounds {
                None => (lon, lon, lat, lat),
                Some((min_lon, max_lon, min_lat, max_lat)) => (
                    min_lon.min(lon),
                    max_lon.max(lon),
                    min_lat.min(lat),
                    max_lat.max(lat),
                ),
            });
        }

        let Some((min_lon, max_lon, min_lat, max_lat)) = bounds else {
            return Self {
                padding,
                min_lon: 0.0,
                max_lat: 0.0,
                zoom: 0.0,
            };
        };

        let width_zoom = (!is_zero(max_lon - min_lon))
            .then(|| (max_width - 2.0 * padding) / (max_lon - min_lon));
        let height_zoom = (!is_zero(max_lat - min_lat))
            .then(|| (max_height - 2.0 * padding) / (max_lat - min_lat));

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

    pub fn project(&self, point: Point) -> svg::Point {
        svg::Point::new(
            (point.x() - self.min_lon) * self.zoom + self.padding,
            (self.max_lat - point.y()) * self.zoom + self.padding,
        )
    }
}
