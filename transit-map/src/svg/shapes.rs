//! SVG shapes and their shared presentation attributes.

use std::fmt;

use super::color::Color;
use super::number::Num;

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Shape drawn at the ends of open stroke segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for StrokeLineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineCap::Butt => "butt",
            StrokeLineCap::Round => "round",
            StrokeLineCap::Square => "square",
        })
    }
}

/// Shape drawn at the corners of stroked paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl fmt::Display for StrokeLineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineJoin::Arcs => "arcs",
            StrokeLineJoin::Bevel => "bevel",
            StrokeLineJoin::Miter => "miter",
            StrokeLineJoin::MiterClip => "miter-clip",
            StrokeLineJoin::Round => "round",
        })
    }
}

/// Optional fill and stroke attributes. Unset attributes are not emitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathProps {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub line_cap: Option<StrokeLineCap>,
    pub line_join: Option<StrokeLineJoin>,
}

impl fmt::Display for PathProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(f, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(f, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(f, " stroke-width=\"{}\"", Num(width))?;
        }
        if let Some(cap) = self.line_cap {
            write!(f, " stroke-linecap=\"{cap}\"")?;
        }
        if let Some(join) = self.line_join {
            write!(f, " stroke-linejoin=\"{join}\"")?;
        }
        Ok(())
    }
}

/// Fluent setters for any shape carrying [`PathProps`].
pub trait Styled: Sized {
    fn props_mut(&mut self) -> &mut PathProps;

    fn fill(mut self, color: impl Into<Color>) -> Self {
        self.props_mut().fill = Some(color.into());
        self
    }

    fn stroke(mut self, color: impl Into<Color>) -> Self {
        self.props_mut().stroke = Some(color.into());
        self
    }

    fn stroke_width(mut self, width: f64) -> Self {
        self.props_mut().stroke_width = Some(width);
        self
    }

    fn line_cap(mut self, cap: StrokeLineCap) -> Self {
        self.props_mut().line_cap = Some(cap);
        self
    }

    fn line_join(mut self, join: StrokeLineJoin) -> Self {
        self.props_mut().line_join = Some(join);
        self
    }
}

/// `<circle>`
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub props: PathProps,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: Point::default(),
            radius: 1.0,
            props: PathProps::default(),
        }
    }
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

impl Styled for Circle {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
            Num(self.center.x),
            Num(self.center.y),
            Num(self.radius),
            self.props
        )
    }
}

/// `<polyline>`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub props: PathProps,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }
}

impl Styled for Polyline {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<polyline{} points=\"", self.props)?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{},{}", Num(p.x), Num(p.y))?;
        }
        f.write_str("\"/>")
    }
}

/// `<text>`
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub position: Point,
    pub offset: Point,
    pub font_size: u32,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub data: String,
    pub props: PathProps,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            position: Point::default(),
            offset: Point::default(),
            font_size: 1,
            font_family: None,
            font_weight: None,
            data: String::new(),
            props: PathProps::default(),
        }
    }
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }
}

impl Styled for Text {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<text{} x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.props,
            Num(self.position.x),
            Num(self.position.y),
            Num(self.offset.x),
            Num(self.offset.y),
            self.font_size
        )?;
        if let Some(family) = &self.font_family {
            write!(f, " font-family=\"{family}\"")?;
        }
        if let Some(weight) = &self.font_weight {
            write!(f, " font-weight=\"{weight}\"")?;
        }
        write!(f, ">{}</text>", Escaped(&self.data))
    }
}

/// XML-escapes text content.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '&' => f.write_str("&amp;")?,
                c => fmt::Write::write_char(f, c)?,
            }
        }
        Ok(())
    }
}

/// Any drawable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polyline> for Shape {
    fn from(polyline: Polyline) -> Self {
        Shape::Polyline(polyline)
    }
}

impl From<Text> for Shape {
    fn from(text: Text) -> Self {
        Shape::Text(text)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(circle) => fmt::Display::fmt(circle, f),
            Shape::Polyline(polyline) => fmt::Display::fmt(polyline, f),
            Shape::Text(text) => fmt::Display::fmt(text, f),
        }
    }
}
