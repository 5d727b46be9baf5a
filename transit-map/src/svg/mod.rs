//! Minimal SVG emitter.
//!
//! Shapes and colors are closed enums rendered through `Display`, so a
//! document serializes with `to_string()`.

mod color;
mod document;
mod number;
mod shapes;

pub use color::{Color, Rgb, Rgba};
pub use document::Document;
pub use number::Num;
pub use shapes::{
    Circle, PathProps, Point, Polyline, Shape, StrokeLineCap, StrokeLineJoin, Styled, Text,
};
