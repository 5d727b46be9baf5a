//! SVG color values.

use std::fmt;

use super::number::Num;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// An RGB color with opacity in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub opacity: f64,
}

impl Rgba {
    pub fn new(red: u8, green: u8, blue: u8, opacity: f64) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }
}

/// A paint value for `fill` and `stroke`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Color {
    /// No paint; renders as `none`.
    #[default]
    None,
    /// A named or otherwise literal color, such as `white` or `#ff0000`.
    Named(String),
    Rgb(Rgb),
    Rgba(Rgba),
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::Rgba(rgba)
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::named(name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(name) => f.write_str(name),
            Color::Rgb(c) => write!(f, "rgb({},{},{})", c.red, c.green, c.blue),
            Color::Rgba(c) => write!(
                f,
                "rgba({},{},{},{})",
                c.red,
                c.green,
                c.blue,
                Num(c.opacity)
            ),
        }
    }
}
