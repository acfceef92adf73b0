//! In-memory transit catalogue.
//!
//! Owns every stop and bus for one network. Populated in two passes (all
//! stops and road distances first, then buses) and append-only afterwards:
//! entities are never updated or removed during a run.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use geo::Point;
use tracing::debug;

use crate::identifiers::{BusIdentifier, StopIdentifier};
use crate::models::{Bus, CatalogueError, Result, RouteKind, Stop};

/// In-memory store of stops, buses, their adjacency and road distances.
#[derive(Default)]
pub struct Catalogue {
    stops: HashMap<StopIdentifier, Arc<Stop>>,
    buses: HashMap<BusIdentifier, Arc<Bus>>,

    /// Derived index: stop -> buses whose route visits it.
    stop_buses: HashMap<StopIdentifier, BTreeSet<BusIdentifier>>,

    /// Directed road distances in meters. Lookups fall back to the reverse
    /// direction when the requested one is absent.
    distances: HashMap<(StopIdentifier, StopIdentifier), u32>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop. Stop names are unique; re-adding a name is an error.
    pub fn add_stop(&mut self, name: impl AsRef<str>, location: Point) -> Result<()> {
        let id = StopIdentifier::new(name);
        if self.stops.contains_key(&id) {
            return Err(CatalogueError::DuplicateStop(id));
        }
        self.stops.insert(id.clone(), Arc::new(Stop { id, location }));
        Ok(())
    }

    /// Record the directed road distance from one stop to another, in meters.
    /// Both stops must already be present.
    pub fn add_distance(
        &mut self,
        from: impl AsRef<str>,
        to: impl AsRef<str>,
        meters: u32,
    ) -> Result<()> {
        let from = self.resolve(from.as_ref())?.id.clone();
        let to = self.resolve(to.as_ref())?.id.clone();
        self.distances.insert((from, to), meters);
        Ok(())
    }

    /// Add a bus route over stops that are already present, and index the
    /// route's stops back to the bus.
    pub fn add_bus(
        &mut self,
        name: impl AsRef<str>,
        stop_names: &[impl AsRef<str>],
        kind: RouteKind,
    ) -> Result<()> {
        let id = BusIdentifier::new(name);
        if self.buses.contains_key(&id) {
            return Err(CatalogueError::DuplicateBus(id));
        }

        let mut route = Vec::with_capacity(stop_names.len());
        for stop_name in stop_names {
            route.push(self.resolve(stop_name.as_ref())?.clone());
        }

        for stop in &route {
            self.stop_buses
                .entry(stop.id.clone())
                .or_default()
                .insert(id.clone());
        }

        debug!(bus = %id, stops = route.len(), ?kind, "added bus");
        self.buses.insert(id.clone(), Arc::new(Bus { id, kind, route }));
        Ok(())
    }

    pub fn stop(&self, name: &str) -> Option<&Arc<Stop>> {
        self.stops.get(&StopIdentifier::new(name))
    }

    pub fn bus(&self, name: &str) -> Option<&Arc<Bus>> {
        self.buses.get(&BusIdentifier::new(name))
    }

    /// Buses whose route visits the named stop, sorted by name.
    ///
    /// Returns `None` for an unknown stop and an empty set for a known stop
    /// that no bus serves; callers can tell the two apart.
    pub fn buses_through(&self, stop_name: &str) -> Option<BTreeSet<BusIdentifier>> {
        let id = StopIdentifier::new(stop_name);
        if !self.stops.contains_key(&id) {
            return None;
        }
        Some(self.stop_buses.get(&id).cloned().unwrap_or_default())
    }

    /// Road distance from `a` to `b`, falling back to the reverse entry.
    ///
    /// The fallback treats an unspecified reverse direction as symmetric,
    /// which is indistinguishable from an intentionally asymmetric network
    /// where only one direction was given. Kept for compatibility with the
    /// data format.
    pub fn distance_between(&self, a: &Arc<Stop>, b: &Arc<Stop>) -> Result<u32> {
        let forward = (a.id.clone(), b.id.clone());
        if let Some(&d) = self.distances.get(&forward) {
            return Ok(d);
        }
        let reverse = (b.id.clone(), a.id.clone());
        match self.distances.get(&reverse) {
            Some(&d) => Ok(d),
            None => Err(CatalogueError::MissingDistance {
                from: a.id.clone(),
                to: b.id.clone(),
            }),
        }
    }

    /// Every bus in the catalogue, in no meaningful order. Callers that need
    /// a stable order sort explicitly.
    pub fn all_buses(&self) -> Vec<Arc<Bus>> {
        self.buses.values().cloned().collect()
    }

    /// Stops served by at least one bus, keyed by name for deterministic
    /// iteration.
    pub fn stops_served(&self) -> BTreeMap<StopIdentifier, Arc<Stop>> {
        self.stops
            .iter()
            .filter(|(id, _)| {
                self.stop_buses
                    .get(id)
                    .is_some_and(|buses| !buses.is_empty())
            })
            .map(|(id, stop)| (id.clone(), stop.clone()))
            .collect()
    }

    fn resolve(&self, name: &str) -> Result<&Arc<Stop>> {
        self.stops
            .get(&StopIdentifier::new(name))
            .ok_or_else(|| CatalogueError::UnknownStop(StopIdentifier::new(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalogue() -> Catalogue {
        let mut catalogue = Catalogue::new();
        catalogue.add_stop("A", Point::new(37.20, 55.61)).unwrap();
        catalogue.add_stop("B", Point::new(37.21, 55.60)).unwrap();
        catalogue.add_stop("C", Point::new(37.22, 55.59)).unwrap();
        catalogue
    }

    #[test]
    fn test_duplicate_stop_rejected() {
        let mut catalogue = sample_catalogue();
        assert!(matches!(
            catalogue.add_stop("A", Point::new(0.0, 0.0)),
            Err(CatalogueError::DuplicateStop(_))
        ));
    }

    #[test]
    fn test_bus_requires_known_stops() {
        let mut catalogue = sample_catalogue();
        let err = catalogue
            .add_bus("9", &["A", "nowhere"], RouteKind::Linear)
            .unwrap_err();
        assert!(matches!(err, CatalogueError::UnknownStop(_)));
        assert!(catalogue.bus("9").is_none());
    }

    #[test]
    fn test_buses_through_distinguishes_unknown_from_unserved() {
        let mut catalogue = sample_catalogue();
        catalogue.add_bus("1", &["A", "B"], RouteKind::Linear).unwrap();

        // Unknown stop: no answer at all.
        assert!(catalogue.buses_through("nowhere").is_none());

        // Known but unserved stop: empty set.
        let through_c = catalogue.buses_through("C").unwrap();
        assert!(through_c.is_empty());

        let through_a = catalogue.buses_through("A").unwrap();
        assert_eq!(through_a.len(), 1);
        assert!(through_a.contains(&BusIdentifier::new("1")));
    }

    #[test]
    fn test_buses_through_sorted_without_duplicates() {
        let mut catalogue = sample_catalogue();
        catalogue.add_bus("22", &["A", "B", "A"], RouteKind::Circular).unwrap();
        catalogue.add_bus("7", &["A", "C"], RouteKind::Linear).unwrap();

        let through_a: Vec<String> = catalogue
            .buses_through("A")
            .unwrap()
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(through_a, ["22", "7"]);
    }

    #[test]
    fn test_distance_fallback_to_reverse() {
        let mut catalogue = sample_catalogue();
        catalogue.add_distance("A", "B", 100).unwrap();
        catalogue.add_distance("B", "C", 150).unwrap();
        catalogue.add_distance("C", "B", 200).unwrap();

        let a = catalogue.stop("A").unwrap().clone();
        let b = catalogue.stop("B").unwrap().clone();
        let c = catalogue.stop("C").unwrap().clone();

        // Forward entry wins when present.
        assert_eq!(catalogue.distance_between(&b, &c).unwrap(), 150);
        assert_eq!(catalogue.distance_between(&c, &b).unwrap(), 200);

        // Reverse entry used when forward is absent.
        assert_eq!(catalogue.distance_between(&b, &a).unwrap(), 100);

        // Neither direction present is an error.
        assert!(matches!(
            catalogue.distance_between(&a, &c),
            Err(CatalogueError::MissingDistance { .. })
        ));
    }

    #[test]
    fn test_stops_served_sorted_by_name() {
        let mut catalogue = sample_catalogue();
        catalogue.add_stop("D", Point::new(37.23, 55.58)).unwrap();
        catalogue.add_bus("1", &["C", "A"], RouteKind::Linear).unwrap();

        let served: Vec<String> = catalogue
            .stops_served()
            .keys()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(served, ["A", "C"]);
    }
}
