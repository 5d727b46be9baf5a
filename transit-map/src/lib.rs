//! Transit catalogue and map renderer.
//!
//! Loads stops, buses and road distances from a JSON request document,
//! answers route and stop queries, and draws the network as an SVG map.

pub mod batch;
pub mod catalogue;
pub mod domain;
pub mod handler;
pub mod input;
pub mod render;
pub mod svg;
