//! Turns a catalogue snapshot plus render settings into an ordered SVG
//! document.
//!
//! Layering is fixed, later layers drawn on top: route polylines, route name
//! labels, stop markers, stop name labels. Within a layer, buses go in
//! ascending name order and stops in ascending name order, so output is
//! deterministic for a given catalogue.

use std::collections::BTreeMap;
use std::sync::Arc;

use ridemap_catalogue::{Bus, Catalogue, RouteKind, Stop, StopIdentifier};
use tracing::debug;

use crate::projector::SphereProjector;
use crate::settings::RenderSettings;
use crate::svg::{self, Circle, Color, Document, LineCap, LineJoin, Polyline, Text};

const LABEL_FONT_FAMILY: &str = "Verdana";

/// A bus with its assigned palette color.
struct ColoredBus {
    bus: Arc<Bus>,
    color: Color,
}

pub struct MapComposer {
    settings: RenderSettings,
}

impl MapComposer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Render the whole network as an SVG document.
    pub fn compose(&self, catalogue: &Catalogue) -> Document {
        let colored = self.assign_palette(catalogue.all_buses());
        let stops = catalogue.stops_served();
        let projector = SphereProjector::new(
            stops.values().map(|stop| stop.location),
            self.settings.canvas.width,
            self.settings.canvas.height,
            self.settings.canvas.padding,
        );

        let mut doc = Document::new();
        self.add_route_lines(&mut doc, &colored, &projector);
        self.add_route_labels(&mut doc, &colored, &projector);
        self.add_stop_markers(&mut doc, &stops, &projector);
        self.add_stop_labels(&mut doc, &stops, &projector);

        debug!(
            buses = colored.len(),
            stops = stops.len(),
            drawables = doc.len(),
            "composed map"
        );
        doc
    }

    /// Sort buses by name and assign palette colors round-robin.
    ///
    /// Every bus gets the color at the current palette index, but the index
    /// advances only past buses with a non-empty route. An empty-route bus
    /// therefore draws nothing and does not consume a palette slot.
    fn assign_palette(&self, mut buses: Vec<Arc<Bus>>) -> Vec<ColoredBus> {
        buses.sort_by(|lhs, rhs| lhs.id.cmp(&rhs.id));

        let palette = &self.settings.palette;
        let mut index = 0;
        buses
            .into_iter()
            .map(|bus| {
                let color = if palette.is_empty() {
                    Color::None
                } else {
                    palette[index % palette.len()].clone()
                };
                if !bus.route.is_empty() {
                    index += 1;
                }
                ColoredBus { bus, color }
            })
            .collect()
    }

    fn add_route_lines(
        &self,
        doc: &mut Document,
        colored: &[ColoredBus],
        projector: &SphereProjector,
    ) {
        for ColoredBus { bus, color } in colored {
            if bus.route.is_empty() {
                continue;
            }

            let mut line = Polyline::new();
            for stop in &bus.route {
                line = line.add_point(projector.project(stop.location));
            }
            // Linear routes travel back along the same stops; the turnaround
            // point is already drawn.
            if bus.kind == RouteKind::Linear && bus.route.len() > 1 {
                for stop in bus.route[..bus.route.len() - 1].iter().rev() {
                    line = line.add_point(projector.project(stop.location));
                }
            }

            doc.add(
                line.fill(Color::None)
                    .stroke(color.clone())
                    .stroke_width(self.settings.bus.line_width)
                    .line_cap(LineCap::Round)
                    .line_join(LineJoin::Round),
            );
        }
    }

    fn add_route_labels(
        &self,
        doc: &mut Document,
        colored: &[ColoredBus],
        projector: &SphereProjector,
    ) {
        for ColoredBus { bus, color } in colored {
            let Some(first) = bus.route.first() else {
                continue;
            };

            let (underlay, label) =
                self.route_label_pair(bus.id.as_str(), projector.project(first.location), color);
            doc.add(underlay);
            doc.add(label);

            if bus.kind == RouteKind::Linear {
                if let Some(last) = bus.route.last() {
                    // Second terminus label only when it is a different stop.
                    if !Arc::ptr_eq(first, last) {
                        let (underlay, label) = self.route_label_pair(
                            bus.id.as_str(),
                            projector.project(last.location),
                            color,
                        );
                        doc.add(underlay);
                        doc.add(label);
                    }
                }
            }
        }
    }

    fn add_stop_markers(
        &self,
        doc: &mut Document,
        stops: &BTreeMap<StopIdentifier, Arc<Stop>>,
        projector: &SphereProjector,
    ) {
        for stop in stops.values() {
            doc.add(
                Circle::new()
                    .center(projector.project(stop.location))
                    .radius(self.settings.stop.radius)
                    .fill(Color::named("white")),
            );
        }
    }

    fn add_stop_labels(
        &self,
        doc: &mut Document,
        stops: &BTreeMap<StopIdentifier, Arc<Stop>>,
        projector: &SphereProjector,
    ) {
        let label = &self.settings.stop.label;
        let underlay = &self.settings.underlay;
        for stop in stops.values() {
            let position = projector.project(stop.location);

            doc.add(
                Text::new()
                    .position(position)
                    .offset(label.offset)
                    .font_size(label.font_size)
                    .font_family(LABEL_FONT_FAMILY)
                    .content(stop.id.as_str())
                    .fill(underlay.color.clone())
                    .stroke(underlay.color.clone())
                    .stroke_width(underlay.width)
                    .line_cap(LineCap::Round)
                    .line_join(LineJoin::Round),
            );
            doc.add(
                Text::new()
                    .position(position)
                    .offset(label.offset)
                    .font_size(label.font_size)
                    .font_family(LABEL_FONT_FAMILY)
                    .content(stop.id.as_str())
                    .fill(Color::named("black")),
            );
        }
    }

    /// Underlay and fill copies of one route name label.
    fn route_label_pair(&self, name: &str, at: svg::Point, color: &Color) -> (Text, Text) {
        let label = &self.settings.bus.label;
        let underlay_settings = &self.settings.underlay;

        let base = |text: Text| {
            text.position(at)
                .offset(label.offset)
                .font_size(label.font_size)
                .font_family(LABEL_FONT_FAMILY)
                .font_weight("bold")
                .content(name)
        };

        let underlay = base(Text::new())
            .fill(underlay_settings.color.clone())
            .stroke(underlay_settings.color.clone())
            .stroke_width(underlay_settings.width)
            .line_cap(LineCap::Round)
            .line_join(LineJoin::Round);
        let label = base(Text::new()).fill(color.clone());
        (underlay, label)
    }
}
