//! Route statistics: the query surface of the catalogue.

use std::collections::HashSet;
use std::sync::Arc;

use crate::distance::great_circle_distance;
use crate::models::{Bus, BusStat, Result, RouteKind};
use crate::store::Catalogue;

impl Catalogue {
    /// Stops visited over a full traversal of the route.
    ///
    /// Circular routes are traversed once; linear routes come back along the
    /// same stops, so `N` stored stops give `2N - 1` visits (the turnaround
    /// stop is not counted twice).
    pub fn route_stop_count(&self, bus: &Bus) -> usize {
        if bus.route.is_empty() {
            return 0;
        }
        match bus.kind {
            RouteKind::Circular => bus.route.len(),
            RouteKind::Linear => bus.route.len() * 2 - 1,
        }
    }

    /// Distinct stops on the route, by stop identity.
    pub fn unique_stop_count(&self, bus: &Bus) -> usize {
        bus.route
            .iter()
            .map(Arc::as_ptr)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Great-circle length of the route in meters: the sum over consecutive
    /// stops, doubled for linear routes. 0.0 for empty or single-stop routes.
    pub fn geographic_length(&self, bus: &Bus) -> f64 {
        let one_way: f64 = bus
            .route
            .windows(2)
            .map(|pair| great_circle_distance(pair[0].location, pair[1].location))
            .sum();
        match bus.kind {
            RouteKind::Circular => one_way,
            RouteKind::Linear => one_way * 2.0,
        }
    }

    /// Road length of the full traversal in meters, using recorded directed
    /// distances (with reverse fallback) between consecutive stops.
    ///
    /// Linear routes add the return legs in travel order. Circular routes add
    /// nothing extra: their stored sequence already ends back at the origin.
    pub fn road_length(&self, bus: &Bus) -> Result<u32> {
        let mut length = 0;
        for pair in bus.route.windows(2) {
            length += self.distance_between(&pair[0], &pair[1])?;
        }
        if bus.kind == RouteKind::Linear {
            for pair in bus.route.windows(2).rev() {
                length += self.distance_between(&pair[1], &pair[0])?;
            }
        }
        Ok(length)
    }

    /// Ratio of road length to great-circle length.
    ///
    /// A route whose stops all share one position has zero geographic length;
    /// the division is not masked and yields a non-finite value.
    pub fn curvature(&self, bus: &Bus) -> Result<f64> {
        let road_length = self.road_length(bus)?;
        Ok(self.curvature_ratio(bus, road_length))
    }

    fn curvature_ratio(&self, bus: &Bus, road_length: u32) -> f64 {
        road_length as f64 / self.geographic_length(bus)
    }

    /// Full statistics for the named bus, or `None` if it is unknown.
    pub fn bus_stat(&self, name: &str) -> Result<Option<BusStat>> {
        let Some(bus) = self.bus(name).cloned() else {
            return Ok(None);
        };
        let route_length = self.road_length(&bus)?;
        Ok(Some(BusStat {
            curvature: self.curvature_ratio(&bus, route_length),
            route_length,
            stop_count: self.route_stop_count(&bus),
            unique_stop_count: self.unique_stop_count(&bus),
        }))
    }
}
