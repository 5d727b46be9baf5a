//! Input document DTOs.
//!
//! These types map directly onto the JSON request document. They are
//! converted into catalogue entries and render settings by
//! [`super::convert`].

use std::collections::BTreeMap;

use serde::Deserialize;

/// The whole request document.
#[derive(Debug, Clone, Deserialize)]
pub struct InputDocument {
    /// Stops and buses to load into the catalogue.
    pub base_requests: Vec<BaseRequest>,

    /// Map styling.
    pub render_settings: RenderSettingsDto,

    /// Queries to answer, in output order.
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// A catalogue record.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRecord),
    Bus(BusRecord),
}

/// A stop with its outgoing road distances.
#[derive(Debug, Clone, Deserialize)]
pub struct StopRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Distances in meters from this stop to the named neighbours.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

/// A bus route over named stops.
#[derive(Debug, Clone, Deserialize)]
pub struct BusRecord {
    pub name: String,

    /// Stop names in travel order.
    pub stops: Vec<String>,

    pub is_roundtrip: bool,
}

/// Render settings as they appear in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderSettingsDto {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    /// Any JSON number; truncated to a whole font size.
    pub bus_label_font_size: f64,
    pub bus_label_offset: [f64; 2],
    pub stop_label_font_size: f64,
    pub stop_label_offset: [f64; 2],
    pub underlayer_color: ColorDto,
    pub underlayer_width: f64,
    pub color_palette: Vec<ColorDto>,
}

/// A color: a name, `[r, g, b]`, or `[r, g, b, opacity]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorDto {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

/// A query. `id` is echoed back as `request_id`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. } | StatRequest::Stop { id, .. } | StatRequest::Map { id } => {
                *id
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stop_record() {
        let json = r#"{
            "type": "Stop",
            "name": "Ривьерский мост",
            "latitude": 43.587795,
            "longitude": 39.716901,
            "road_distances": {"Морской вокзал": 850}
        }"#;
        let request: BaseRequest = serde_json::from_str(json).unwrap();
        let BaseRequest::Stop(stop) = request else {
            panic!("expected a stop");
        };
        assert_eq!(stop.name, "Ривьерский мост");
        assert_eq!(stop.latitude, 43.587795);
        assert_eq!(stop.road_distances.get("Морской вокзал"), Some(&850));
    }

    #[test]
    fn road_distances_default_to_empty() {
        let json = r#"{"type": "Stop", "name": "A", "latitude": 1.0, "longitude": 2}"#;
        let request: BaseRequest = serde_json::from_str(json).unwrap();
        let BaseRequest::Stop(stop) = request else {
            panic!("expected a stop");
        };
        assert!(stop.road_distances.is_empty());
        assert_eq!(stop.longitude, 2.0);
    }

    #[test]
    fn parse_bus_record() {
        let json = r#"{"type": "Bus", "name": "114", "stops": ["A", "B"], "is_roundtrip": false}"#;
        let request: BaseRequest = serde_json::from_str(json).unwrap();
        let BaseRequest::Bus(bus) = request else {
            panic!("expected a bus");
        };
        assert_eq!(bus.name, "114");
        assert_eq!(bus.stops, vec!["A", "B"]);
        assert!(!bus.is_roundtrip);
    }

    #[test]
    fn unknown_record_type_is_rejected() {
        let json = r#"{"type": "Tram", "name": "1"}"#;
        assert!(serde_json::from_str::<BaseRequest>(json).is_err());
    }

    #[test]
    fn parse_colors() {
        let colors: Vec<ColorDto> =
            serde_json::from_str(r#"["green", [255, 160, 0], [255, 255, 255, 0.85]]"#).unwrap();
        assert_eq!(
            colors,
            vec![
                ColorDto::Named("green".into()),
                ColorDto::Rgb(255, 160, 0),
                ColorDto::Rgba(255, 255, 255, 0.85),
            ]
        );
    }

    #[test]
    fn out_of_range_color_is_rejected() {
        assert!(serde_json::from_str::<ColorDto>("[256, 0, 0]").is_err());
        assert!(serde_json::from_str::<ColorDto>("[1, 2]").is_err());
    }

    #[test]
    fn parse_stat_requests() {
        let requests: Vec<StatRequest> = serde_json::from_str(
            r#"[
                {"id": 1, "type": "Bus", "name": "114"},
                {"id": 2, "type": "Stop", "name": "A"},
                {"id": 3, "type": "Map"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            requests,
            vec![
                StatRequest::Bus {
                    id: 1,
                    name: "114".into()
                },
                StatRequest::Stop {
                    id: 2,
                    name: "A".into()
                },
                StatRequest::Map { id: 3 },
            ]
        );
        assert_eq!(requests[2].id(), 3);
    }

    #[test]
    fn stat_request_without_name_is_rejected() {
        assert!(serde_json::from_str::<StatRequest>(r#"{"id": 1, "type": "Bus"}"#).is_err());
    }
}
