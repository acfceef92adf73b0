//! # ridemap-catalogue
//!
//! In-memory transit network model and query engine.
//!
//! ## Features
//!
//! - **Two-pass population**: stops and road distances first, then buses
//! - **Route statistics**: stop counts, road/geographic length, curvature
//! - **Derived adjacency**: stop -> buses index maintained as buses are added
//! - **Deterministic queries**: name-sorted answers wherever order matters
//!
//! ## Example
//!
//! ```
//! use ridemap_catalogue::prelude::*;
//! use geo::Point;
//!
//! let mut catalogue = Catalogue::new();
//! catalogue.add_stop("Rasskazovka", Point::new(37.333324, 55.532761))?;
//! catalogue.add_stop("Marushkino", Point::new(37.209755, 55.595884))?;
//! catalogue.add_distance("Rasskazovka", "Marushkino", 9900)?;
//! catalogue.add_bus("750", &["Rasskazovka", "Marushkino"], RouteKind::Linear)?;
//!
//! let stat = catalogue.bus_stat("750")?.unwrap();
//! assert_eq!(stat.route_length, 19800);
//! assert_eq!(stat.stop_count, 3);
//! # Ok::<(), ridemap_catalogue::CatalogueError>(())
//! ```

pub mod distance;
pub mod identifiers;
pub mod models;
pub mod stats;
pub mod store;

// Re-exports for convenience
pub mod prelude {
    pub use crate::distance::great_circle_distance;
    pub use crate::identifiers::{BusIdentifier, StopIdentifier};
    pub use crate::models::{Bus, BusStat, CatalogueError, RouteKind, Stop};
    pub use crate::store::Catalogue;
}

pub use prelude::*;
