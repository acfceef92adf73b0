//! Great-circle distance between geographic coordinates.
//!
//! Uses the Haversine formula for accurate distances on Earth's surface.

use geo::{HaversineDistance, Point};

/// Great-circle distance between two points in meters.
pub fn great_circle_distance(p1: Point, p2: Point) -> f64 {
    p1.haversine_distance(&p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_great_circle_distance() {
        // Distance from NYC to LA is approximately 3,936 km
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);

        let dist = great_circle_distance(nyc, la);
        assert!((dist - 3_936_000.0).abs() < 50_000.0); // Within 50km
    }

    #[test]
    fn test_zero_distance() {
        let p = Point::new(37.6517, 55.5741);
        assert_eq!(great_circle_distance(p, p), 0.0);
    }
}
