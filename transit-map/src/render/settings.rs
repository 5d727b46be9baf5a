//! Rendering configuration for the map.

use crate::svg::{Color, Point, Rgb, Rgba};

/// Configuration parameters for map rendering.
///
/// Built once from the input document and passed by reference to the
/// projector and renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Canvas width.
    pub width: f64,

    /// Canvas height.
    pub height: f64,

    /// Distance from the canvas edges to the outermost stops.
    pub padding: f64,

    /// Stroke width of route polylines.
    pub line_width: f64,

    /// Radius of stop markers.
    pub stop_radius: f64,

    /// Font size of route labels.
    pub bus_label_font_size: u32,

    /// Offset of route labels from their stop.
    pub bus_label_offset: Point,

    /// Font size of stop labels.
    pub stop_label_font_size: u32,

    /// Offset of stop labels from their stop.
    pub stop_label_offset: Point,

    /// Fill and stroke of the halo drawn under every label.
    pub underlayer_color: Color,

    /// Stroke width of the label halo.
    pub underlayer_width: f64,

    /// Route colors, assigned by the route's rank in name order.
    /// Cycles when there are more routes than colors.
    pub color_palette: Vec<Color>,
}

impl RenderSettings {
    /// Color of the route at `rank` in name order.
    ///
    /// An empty palette paints nothing.
    pub fn route_color(&self, rank: usize) -> Color {
        if self.color_palette.is_empty() {
            return Color::None;
        }
        self.color_palette[rank % self.color_palette.len()].clone()
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1200.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: Point::new(7.0, 15.0),
            stop_label_font_size: 20,
            stop_label_offset: Point::new(7.0, -3.0),
            underlayer_color: Color::Rgba(Rgba::new(255, 255, 255, 0.85)),
            underlayer_width: 3.0,
            color_palette: vec![
                Color::named("green"),
                Color::Rgb(Rgb::new(255, 160, 0)),
                Color::named("red"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = RenderSettings::default();

        assert_eq!(settings.width, 1200.0);
        assert_eq!(settings.height, 1200.0);
        assert_eq!(settings.padding, 50.0);
        assert_eq!(settings.line_width, 14.0);
        assert_eq!(settings.stop_radius, 5.0);
        assert_eq!(settings.bus_label_font_size, 20);
        assert_eq!(settings.stop_label_offset, Point::new(7.0, -3.0));
        assert_eq!(settings.color_palette.len(), 3);
    }

    #[test]
    fn route_colors_cycle() {
        let settings = RenderSettings::default();

        assert_eq!(settings.route_color(0), Color::named("green"));
        assert_eq!(settings.route_color(2), Color::named("red"));
        assert_eq!(settings.route_color(3), settings.route_color(0));
        assert_eq!(settings.route_color(4), settings.route_color(1));
    }

    #[test]
    fn empty_palette_paints_nothing() {
        let settings = RenderSettings {
            color_palette: vec![],
            ..RenderSettings::default()
        };

        assert_eq!(settings.route_color(0), Color::None);
        assert_eq!(settings.route_color(7), Color::None);
    }
}
