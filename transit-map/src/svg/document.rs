//! SVG documents.

use std::fmt;

use super::shapes::Shape;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;
const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;

/// An ordered list of shapes. Later shapes are painted over earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of everything added so far.
    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{XML_DECLARATION}")?;
        writeln!(f, "{SVG_OPEN}")?;
        for shape in &self.shapes {
            writeln!(f, "{shape}")?;
        }
        f.write_str("</svg>")
    }
}
