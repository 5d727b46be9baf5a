//! Map rendering pipeline.
//!
//! Stops on drawn routes are projected onto the canvas by
//! [`SphereProjector`], then [`MapRenderer`] lays out routes, labels and
//! stop markers as an SVG document.

mod projector;
mod renderer;
mod settings;

pub use projector::SphereProjector;
pub use renderer::MapRenderer;
pub use settings::RenderSettings;
