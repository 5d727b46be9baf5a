//! Bus routes and their derived metrics.

use std::fmt;

use super::StopId;

/// Stable key of a bus inside its catalogue's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub(crate) usize);

/// Aggregate figures for one bus, computed once when the bus is added.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteMetrics {
    /// Stops visited along the full traversal (out-and-back counts the
    /// turnaround stop once).
    pub stop_count: usize,

    /// Number of distinct stops on the route.
    pub unique_stop_count: usize,

    /// Sum of declared road distances, in meters.
    pub route_length: u64,

    /// Sum of great-circle distances, in meters.
    pub geo_length: f64,

    pub is_roundtrip: bool,
}

impl RouteMetrics {
    /// Ratio of declared length to straight-line length.
    ///
    /// Routes with no geographic extent (no stops, or every stop at the same
    /// point) report 0 rather than NaN or infinity.
    pub fn curvature(&self) -> f64 {
        if self.geo_length == 0.0 {
            return 0.0;
        }
        self.route_length as f64 / self.geo_length
    }
}

/// A bus route: an ordered list of stop keys in travel order.
///
/// A bus never owns stop data. Its keys are resolved through the catalogue
/// that created it.
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    name: String,
    stops: Vec<StopId>,
    is_roundtrip: bool,
    metrics: RouteMetrics,
}

impl Bus {
    pub(crate) fn new(
        name: impl Into<String>,
        stops: Vec<StopId>,
        is_roundtrip: bool,
        metrics: RouteMetrics,
    ) -> Self {
        Self {
            name: name.into(),
            stops,
            is_roundtrip,
            metrics,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stops in travel order, as listed in the input.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    pub fn is_roundtrip(&self) -> bool {
        self.is_roundtrip
    }

    pub fn metrics(&self) -> &RouteMetrics {
        &self.metrics
    }

    /// Whether the route has any stops at all.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn first_stop(&self) -> Option<StopId> {
        self.stops.first().copied()
    }

    pub fn last_stop(&self) -> Option<StopId> {
        self.stops.last().copied()
    }
}

impl fmt::Display for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
