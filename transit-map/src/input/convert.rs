//! Conversion from input DTOs to the catalogue and render settings.
//!
//! Buses resolve their stops and compute their metrics the moment they are
//! added, so the catalogue is filled in three passes: every stop, then every
//! declared distance, then every bus.

use tracing::info;

use crate::catalogue::TransportCatalogue;
use crate::domain::Coordinates;
use crate::render::RenderSettings;
use crate::svg::{Color, Point, Rgb, Rgba};

use super::error::InputError;
use super::types::{BaseRequest, ColorDto, RenderSettingsDto};

/// Build a catalogue from the document's base requests.
pub fn build_catalogue(requests: &[BaseRequest]) -> Result<TransportCatalogue, InputError> {
    let mut catalogue = TransportCatalogue::new();

    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            catalogue.add_stop(
                stop.name.clone(),
                Coordinates::new(stop.latitude, stop.longitude),
            );
        }
    }

    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            catalogue.add_distances(
                &stop.name,
                stop.road_distances
                    .iter()
                    .map(|(to, &meters)| (to.as_str(), meters)),
            )?;
        }
    }

    for request in requests {
        if let BaseRequest::Bus(bus) = request {
            catalogue.add_bus(bus.name.clone(), &bus.stops, bus.is_roundtrip)?;
        }
    }

    info!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        "catalogue built"
    );

    Ok(catalogue)
}

impl From<ColorDto> for Color {
    fn from(dto: ColorDto) -> Self {
        match dto {
            ColorDto::Named(name) => Color::Named(name),
            ColorDto::Rgb(r, g, b) => Color::Rgb(Rgb::new(r, g, b)),
            ColorDto::Rgba(r, g, b, opacity) => Color::Rgba(Rgba::new(r, g, b, opacity)),
        }
    }
}

impl From<RenderSettingsDto> for RenderSettings {
    fn from(dto: RenderSettingsDto) -> Self {
        let [bus_dx, bus_dy] = dto.bus_label_offset;
        let [stop_dx, stop_dy] = dto.stop_label_offset;

        Self {
            width: dto.width,
            height: dto.height,
            padding: dto.padding,
            line_width: dto.line_width,
            stop_radius: dto.stop_radius,
            bus_label_font_size: font_size(dto.bus_label_font_size),
            bus_label_offset: Point::new(bus_dx, bus_dy),
            stop_label_font_size: font_size(dto.stop_label_font_size),
            stop_label_offset: Point::new(stop_dx, stop_dy),
            underlayer_color: dto.underlayer_color.into(),
            underlayer_width: dto.underlayer_width,
            color_palette: dto.color_palette.into_iter().map(Color::from).collect(),
        }
    }
}

/// SVG font sizes are whole numbers. Fractions are dropped and negative
/// values become 0.
fn font_size(size: f64) -> u32 {
    size as u32
}
