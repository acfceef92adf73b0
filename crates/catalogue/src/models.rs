//! Core data types for the transit catalogue.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::{BusIdentifier, StopIdentifier};

// ============================================================================
// Entities
// ============================================================================

/// How a bus traverses its stop sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// Traversed once, start to end; the route implicitly closes back to
    /// its first stop, which is also stored as its last stop.
    Circular,
    /// Traversed forward, then back along the same stops.
    Linear,
}

/// A named geographic point in the network.
///
/// Stops are immutable once added and are shared by reference (`Arc`), so a
/// stop's allocation doubles as its identity for the lifetime of a catalogue.
#[derive(Clone, Debug)]
pub struct Stop {
    pub id: StopIdentifier,
    /// x = longitude, y = latitude (degrees).
    pub location: Point,
}

/// A named ordered sequence of stops with a traversal kind.
///
/// The stored sequence may visit the same stop more than once.
#[derive(Clone, Debug)]
pub struct Bus {
    pub id: BusIdentifier,
    pub kind: RouteKind,
    pub route: Vec<Arc<Stop>>,
}

/// Aggregate statistics for one bus route.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BusStat {
    /// Road length divided by geographic (great-circle) length.
    pub curvature: f64,
    /// Road length of the full traversal in meters.
    pub route_length: u32,
    /// Stops visited over the full traversal (linear routes count the
    /// return leg, without double-counting the turnaround stop).
    pub stop_count: usize,
    /// Distinct stops on the route.
    pub unique_stop_count: usize,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("Stop already exists: {0}")]
    DuplicateStop(StopIdentifier),

    #[error("Bus already exists: {0}")]
    DuplicateBus(BusIdentifier),

    #[error("Stop not found: {0}")]
    UnknownStop(StopIdentifier),

    /// No road distance recorded in either direction for a stop pair.
    /// This is a data-integrity error: well-formed input always provides at
    /// least one direction for every consecutive pair on a route.
    #[error("No road distance between {from} and {to}")]
    MissingDistance {
        from: StopIdentifier,
        to: StopIdentifier,
    },
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
