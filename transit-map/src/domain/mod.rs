//! Domain types for the transit catalogue.
//!
//! Stops and buses are plain records owned by the catalogue. Buses refer to
//! stops through [`StopId`] keys rather than owning or borrowing them, so the
//! catalogue stays the single owner of all route data.

mod bus;
mod stop;

pub use bus::{Bus, BusId, RouteMetrics};
pub use stop::{Coordinates, EARTH_RADIUS_M, Stop, StopId};
