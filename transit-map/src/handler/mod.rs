//! Stat request handling.
//!
//! Turns queries about buses, stops and the map into response objects
//! ready for JSON serialization.

mod dto;
#[allow(clippy::module_inception)]
mod handler;

pub use dto::{BusResponse, ErrorResponse, MapResponse, NOT_FOUND, StatResponse, StopResponse};
pub use handler::RequestHandler;
