//! Map rendering.
//!
//! Layers are emitted in a fixed order (route lines, route labels, stop
//! markers, stop labels), each in name order, so the same catalogue always
//! produces the same document.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalogue::TransportCatalogue;
use crate::domain::Bus;
use crate::svg::{
    Circle, Color, Document, Point, Polyline, StrokeLineCap, StrokeLineJoin, Styled, Text,
};

use super::projector::SphereProjector;
use super::settings::RenderSettings;

const FONT_FAMILY: &str = "Verdana";
const BUS_LABEL_WEIGHT: &str = "bold";
const STOP_MARKER_FILL: &str = "white";
const STOP_LABEL_FILL: &str = "black";

/// A route ready to draw: its projected stops in travel order.
struct ProjectedRoute<'a> {
    bus: &'a Bus,
    points: Vec<Point>,
    color: Color,
}

/// Renders the catalogue's routes as an SVG map.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    settings: RenderSettings,
}

impl MapRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Draw every non-empty route of the catalogue.
    pub fn render(&self, catalogue: &TransportCatalogue) -> Document {
        let buses = catalogue.rendered_buses();

        let projector = SphereProjector::new(
            buses
                .iter()
                .flat_map(|bus| bus.stops())
                .map(|&id| catalogue.stop(id).coordinates()),
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );

        let routes: Vec<ProjectedRoute<'_>> = buses
            .iter()
            .copied()
            .enumerate()
            .map(|(rank, bus)| ProjectedRoute {
                bus,
                points: bus
                    .stops()
                    .iter()
                    .map(|&id| projector.project(catalogue.stop(id).coordinates()))
                    .collect(),
                color: self.settings.route_color(rank),
            })
            .collect();

        let stops: BTreeMap<&str, Point> = buses
            .iter()
            .flat_map(|bus| bus.stops())
            .map(|&id| {
                let stop = catalogue.stop(id);
                (stop.name(), projector.project(stop.coordinates()))
            })
            .collect();

        let mut doc = Document::new();

        for route in &routes {
            doc.add(self.route_line(route));
        }

        for route in &routes {
            self.add_route_labels(&mut doc, route);
        }

        for &point in stops.values() {
            doc.add(self.stop_marker(point));
        }

        for (&name, &point) in &stops {
            doc.add(self.stop_label_underlayer(name, point));
            doc.add(self.stop_label(name, point));
        }

        debug!(
            routes = routes.len(),
            stops = stops.len(),
            shapes = doc.len(),
            zoom = projector.zoom(),
            "map rendered"
        );

        doc
    }

    /// The route's path; out-and-back routes retrace their stops back to
    /// the start without repeating the turnaround point.
    fn route_line(&self, route: &ProjectedRoute<'_>) -> Polyline {
        let mut line = Polyline::new();
        for &point in &route.points {
            line.push(point);
        }
        if !route.bus.is_roundtrip() {
            for &point in route.points.iter().rev().skip(1) {
                line.push(point);
            }
        }

        line.fill(Color::None)
            .stroke(route.color.clone())
            .stroke_width(self.settings.line_width)
            .line_cap(StrokeLineCap::Round)
            .line_join(StrokeLineJoin::Round)
    }

    /// Label the first stop, and the last stop of an out-and-back route
    /// when it differs from the first.
    fn add_route_labels(&self, doc: &mut Document, route: &ProjectedRoute<'_>) {
        let bus = route.bus;
        let (Some(&first), Some(&last)) = (route.points.first(), route.points.last()) else {
            return;
        };

        doc.add(self.bus_label_underlayer(bus.name(), first));
        doc.add(self.bus_label(bus.name(), first, &route.color));

        if !bus.is_roundtrip() && bus.first_stop() != bus.last_stop() {
            doc.add(self.bus_label_underlayer(bus.name(), last));
            doc.add(self.bus_label(bus.name(), last, &route.color));
        }
    }

    fn bus_label_base(&self, name: &str, at: Point) -> Text {
        Text::new()
            .position(at)
            .offset(self.settings.bus_label_offset)
            .font_size(self.settings.bus_label_font_size)
            .font_family(FONT_FAMILY)
            .font_weight(BUS_LABEL_WEIGHT)
            .data(name)
    }

    fn bus_label_underlayer(&self, name: &str, at: Point) -> Text {
        self.underlayer(self.bus_label_base(name, at))
    }

    fn bus_label(&self, name: &str, at: Point, color: &Color) -> Text {
        self.bus_label_base(name, at).fill(color.clone())
    }

    fn stop_marker(&self, at: Point) -> Circle {
        Circle::new()
            .center(at)
            .radius(self.settings.stop_radius)
            .fill(STOP_MARKER_FILL)
    }

    fn stop_label_base(&self, name: &str, at: Point) -> Text {
        Text::new()
            .position(at)
            .offset(self.settings.stop_label_offset)
            .font_size(self.settings.stop_label_font_size)
            .font_family(FONT_FAMILY)
            .data(name)
    }

    fn stop_label_underlayer(&self, name: &str, at: Point) -> Text {
        self.underlayer(self.stop_label_base(name, at))
    }

    fn stop_label(&self, name: &str, at: Point) -> Text {
        self.stop_label_base(name, at).fill(STOP_LABEL_FILL)
    }

    /// Halo drawn under a label so it stays readable over route lines.
    fn underlayer(&self, text: Text) -> Text {
        text.fill(self.settings.underlayer_color.clone())
            .stroke(self.settings.underlayer_color.clone())
            .stroke_width(self.settings.underlayer_width)
            .line_cap(StrokeLineCap::Round)
            .line_join(StrokeLineJoin::Round)
    }
}
