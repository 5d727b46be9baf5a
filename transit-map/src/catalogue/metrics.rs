//! Route-metrics computation.
//!
//! Runs once per bus, at insertion. The declared length comes from the
//! distance table, the geographic length from great-circle distances between
//! consecutive stops. Out-and-back routes are walked a second time in
//! reverse because the road back may differ from the road out.

use std::collections::HashSet;

use crate::domain::{RouteMetrics, Stop, StopId};

use super::distances::DistanceTable;

/// Compute the metrics of a route over `stops`, resolved in the `arena`.
///
/// Every key in `stops` must index into `arena`.
pub(crate) fn compute_route_metrics(
    stops: &[StopId],
    is_roundtrip: bool,
    arena: &[Stop],
    distances: &DistanceTable,
) -> RouteMetrics {
    let (mut route_length, mut geo_length) = accumulate(stops.iter().copied(), arena, distances);

    if !is_roundtrip {
        let (back_length, back_geo) = accumulate(stops.iter().rev().copied(), arena, distances);
        route_length += back_length;
        geo_length += back_geo;
    }

    let unique_stop_count = stops.iter().collect::<HashSet<_>>().len();

    RouteMetrics {
        stop_count: stop_count(stops.len(), is_roundtrip),
        unique_stop_count,
        route_length,
        geo_length,
        is_roundtrip,
    }
}

/// Number of stops along the full traversal.
///
/// An out-and-back route visits its turnaround stop once, hence `2n - 1`.
/// An empty route has no stops in either case.
pub(crate) fn stop_count(listed: usize, is_roundtrip: bool) -> usize {
    if is_roundtrip {
        listed
    } else {
        (listed * 2).saturating_sub(1)
    }
}

/// Sum declared and geographic lengths over consecutive pairs.
fn accumulate(
    stops: impl Iterator<Item = StopId> + Clone,
    arena: &[Stop],
    distances: &DistanceTable,
) -> (u64, f64) {
    let mut route_length = 0u64;
    let mut geo_length = 0.0;

    for (from, to) in stops.clone().zip(stops.skip(1)) {
        route_length += u64::from(distances.get_or_zero(from, to));
        geo_length += arena[from.0]
            .coordinates()
            .distance_to(&arena[to.0].coordinates());
    }

    (route_length, geo_length)
}
