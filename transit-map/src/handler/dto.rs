//! Response objects for stat requests.

use serde::Serialize;

use crate::domain::RouteMetrics;

/// Error text for queries about unknown buses and stops.
pub const NOT_FOUND: &str = "not found";

/// One entry of the output array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus(BusResponse),
    Stop(StopResponse),
    Map(MapResponse),
    Error(ErrorResponse),
}

impl StatResponse {
    pub fn not_found(request_id: i64) -> Self {
        StatResponse::Error(ErrorResponse {
            request_id,
            error_message: NOT_FOUND.to_string(),
        })
    }

    pub fn request_id(&self) -> i64 {
        match self {
            StatResponse::Bus(r) => r.request_id,
            StatResponse::Stop(r) => r.request_id,
            StatResponse::Map(r) => r.request_id,
            StatResponse::Error(r) => r.request_id,
        }
    }
}

/// Route figures for a bus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub request_id: i64,

    /// Declared length in meters
    pub route_length: u64,

    pub stop_count: usize,
    pub unique_stop_count: usize,

    /// Declared length over geographic length
    pub curvature: f64,
}

impl BusResponse {
    pub fn from_metrics(request_id: i64, metrics: &RouteMetrics) -> Self {
        Self {
            request_id,
            route_length: metrics.route_length,
            stop_count: metrics.stop_count,
            unique_stop_count: metrics.unique_stop_count,
            curvature: metrics.curvature(),
        }
    }
}

/// Buses through a stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    pub request_id: i64,

    /// Bus names, sorted
    pub buses: Vec<String>,
}

/// The rendered map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapResponse {
    pub request_id: i64,

    /// SVG document text
    pub map: String,
}

/// A query that could not be answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub request_id: i64,
    pub error_message: String,
}
