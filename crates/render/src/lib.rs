//! # ridemap-render
//!
//! Vector map rendering for a transit catalogue: SVG primitives and canvas,
//! a sphere-to-canvas projector, and the map composer that lays out route
//! lines, route labels, stop markers and stop labels in a fixed order.
//!
//! ## Example
//!
//! ```
//! use geo::Point;
//! use ridemap_catalogue::{Catalogue, RouteKind};
//! use ridemap_render::prelude::*;
//!
//! let mut catalogue = Catalogue::new();
//! catalogue.add_stop("A", Point::new(30.0, 43.0)).unwrap();
//! catalogue.add_stop("B", Point::new(30.1, 43.1)).unwrap();
//! catalogue.add_bus("14", &["A", "B"], RouteKind::Linear).unwrap();
//!
//! let settings = RenderSettings {
//!     canvas: CanvasSettings { width: 600.0, height: 400.0, padding: 50.0 },
//!     palette: vec![Color::named("green")],
//!     ..RenderSettings::default()
//! };
//! let svg = MapComposer::new(settings).compose(&catalogue).to_string();
//! assert!(svg.starts_with("<?xml"));
//! ```

pub mod composer;
pub mod projector;
pub mod settings;
pub mod svg;

// Re-exports for convenience
pub mod prelude {
    pub use crate::composer::MapComposer;
    pub use crate::projector::SphereProjector;
    pub use crate::settings::{
        BusSettings, CanvasSettings, LabelSettings, RenderSettings, StopSettings,
        UnderlaySettings,
    };
    pub use crate::svg::{Circle, Color, Document, LineCap, LineJoin, Polyline, Render, Text};
}

pub use prelude::*;
