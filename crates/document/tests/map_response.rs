//! End-to-end answer construction: a composed SVG map embedded as a string
//! value in a built tree, printed and parsed back by the external JSON layer.

use geo::Point;
use ridemap_catalogue::{Catalogue, RouteKind};
use ridemap_document::{Builder, Node};
use ridemap_render::prelude::*;

fn harbour_catalogue() -> Catalogue {
    let mut catalogue = Catalogue::new();
    catalogue.add_stop("Dock & Quay", Point::new(30.65, 43.58)).unwrap();
    catalogue.add_stop("Hilltop", Point::new(30.64, 43.59)).unwrap();
    catalogue.add_distance("Dock & Quay", "Hilltop", 1700).unwrap();
    catalogue
        .add_bus("14", &["Dock & Quay", "Hilltop"], RouteKind::Linear)
        .unwrap();
    catalogue
}

fn harbour_settings() -> RenderSettings {
    RenderSettings {
        canvas: CanvasSettings {
            width: 600.0,
            height: 400.0,
            padding: 50.0,
        },
        bus: BusSettings {
            line_width: 14.0,
            label: LabelSettings {
                font_size: 20,
                offset: ridemap_render::svg::Point::new(7.0, 15.0),
            },
        },
        stop: StopSettings {
            radius: 5.0,
            label: LabelSettings {
                font_size: 18,
                offset: ridemap_render::svg::Point::new(7.0, -3.0),
            },
        },
        underlay: UnderlaySettings {
            color: Color::rgba(255, 255, 255, 0.85),
            width: 3.0,
        },
        palette: vec![Color::named("green")],
    }
}

#[test]
fn test_map_answer_round_trips_through_printer() {
    let svg = MapComposer::new(harbour_settings())
        .compose(&harbour_catalogue())
        .to_string();

    // {"map": <svg string>, "request_id": N}
    let answer = Builder::new()
        .start_map().unwrap()
        .key("map").unwrap().value(svg.as_str()).unwrap()
        .key("request_id").unwrap().value(5).unwrap()
        .end_map().unwrap()
        .build()
        .unwrap();

    let printed = serde_json::Value::from(answer.clone()).to_string();
    let parsed = Node::from(serde_json::from_str::<serde_json::Value>(&printed).unwrap());
    assert_eq!(parsed, answer);

    // The embedded map survives the JSON layer byte for byte, markup
    // escaping included.
    let map = parsed.as_map().unwrap()["map"].as_str().unwrap();
    assert_eq!(map, svg);
    assert!(map.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>"));
    assert!(map.contains("Dock &amp; Quay"));
    assert!(!map.contains("Dock & Quay"));
    assert_eq!(
        parsed.as_map().unwrap()["request_id"],
        Node::Int(5)
    );
}

#[test]
fn test_full_answer_array_shapes() {
    let catalogue = harbour_catalogue();
    let stat = catalogue.bus_stat("14").unwrap();

    // One answer per request, in request order: a found bus, a missing bus,
    // a stop listing.
    let mut builder = Builder::new().start_array().unwrap();

    if let Some(stat) = stat {
        builder = builder
            .start_map().unwrap()
            .key("curvature").unwrap().value(stat.curvature).unwrap()
            .key("request_id").unwrap().value(1).unwrap()
            .key("route_length").unwrap().value(stat.route_length).unwrap()
            .key("stop_count").unwrap().value(stat.stop_count).unwrap()
            .key("unique_stop_count").unwrap().value(stat.unique_stop_count).unwrap()
            .end_map().unwrap();
    }

    builder = builder
        .start_map().unwrap()
        .key("request_id").unwrap().value(2).unwrap()
        .key("error_message").unwrap().value("not found").unwrap()
        .end_map().unwrap();

    let mut buses = builder.start_map().unwrap().key("buses").unwrap().start_array().unwrap();
    for bus in catalogue.buses_through("Hilltop").unwrap() {
        buses = buses.value(bus.as_str()).unwrap();
    }
    let answers = buses
        .end_array().unwrap()
        .key("request_id").unwrap().value(3).unwrap()
        .end_map().unwrap()
        .end_array().unwrap()
        .build()
        .unwrap();

    let items = answers.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].as_map().unwrap()["stop_count"], Node::Int(3));
    assert_eq!(
        items[1].as_map().unwrap()["error_message"].as_str(),
        Some("not found")
    );
    assert_eq!(
        items[2].as_map().unwrap()["buses"],
        Node::Array(vec![Node::String("14".to_owned())])
    );
}
