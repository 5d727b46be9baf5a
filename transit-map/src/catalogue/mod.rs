//! Transport catalogue.
//!
//! Owns every stop and bus, indexes them by name and keeps the directed
//! distance table. Route metrics are computed as each bus is added, so once
//! the build phase is over the catalogue is only ever read.

mod distances;
mod error;
mod metrics;
mod store;

pub use distances::DistanceTable;
pub use error::CatalogueError;
pub use store::TransportCatalogue;
