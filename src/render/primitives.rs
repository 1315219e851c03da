use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::Point;
use crate::error::{DiagramError, DiagramResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels and a normalized alpha.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    /// CSS `rgba(...)` notation.
    #[must_use]
    pub fn to_css(self) -> String {
        let channel = |value: f64| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        format!(
            "rgba({},{},{},{})",
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            format_decimal(self.alpha)
        )
    }

    pub fn validate(self) -> DiagramResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DiagramError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed {
        dash: f64,
        gap: f64,
    },
}

impl LineStrokeStyle {
    pub fn validate(self) -> DiagramResult<()> {
        if let Self::Dashed { dash, gap } = self {
            if !dash.is_finite() || dash <= 0.0 || !gap.is_finite() || gap < 0.0 {
                return Err(DiagramError::InvalidData(
                    "dash pattern must be finite with dash > 0 and gap >= 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

fn validate_stroke_width(stroke_width: f64, what: &str) -> DiagramResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(DiagramError::InvalidData(format!(
            "{what} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}

/// Draw command for one line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    #[serde(default)]
    pub stroke_style: LineStrokeStyle,
    #[serde(default)]
    pub round_cap: bool,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
            round_cap: false,
        }
    }

    #[must_use]
    pub const fn with_round_cap(mut self) -> Self {
        self.round_cap = true;
        self
    }

    pub fn validate(self) -> DiagramResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(DiagramError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "line")?;
        self.stroke_style.validate()?;
        self.color.validate()
    }
}

/// Open stroked path through a sequence of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub points: SmallVec<[Point; 4]>,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(
        points: impl IntoIterator<Item = Point>,
        stroke_width: f64,
        color: Color,
        stroke_style: LineStrokeStyle,
    ) -> Self {
        Self {
            points: points.into_iter().collect(),
            stroke_width,
            color,
            stroke_style,
        }
    }

    pub fn validate(&self) -> DiagramResult<()> {
        if self.points.len() < 2 {
            return Err(DiagramError::InvalidData(
                "polyline needs at least two points".to_owned(),
            ));
        }
        if !self.points.iter().all(|point| point.is_finite()) {
            return Err(DiagramError::InvalidData(
                "polyline coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "polyline")?;
        self.stroke_style.validate()?;
        self.color.validate()
    }
}

/// Closed filled polygon, used for arrowheads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub points: SmallVec<[Point; 4]>,
    pub fill_color: Color,
}

impl PathPrimitive {
    #[must_use]
    pub fn triangle(a: Point, b: Point, c: Point, fill_color: Color) -> Self {
        Self {
            points: smallvec![a, b, c],
            fill_color,
        }
    }

    pub fn validate(&self) -> DiagramResult<()> {
        if self.points.len() < 3 {
            return Err(DiagramError::InvalidData(
                "path needs at least three points".to_owned(),
            ));
        }
        if !self.points.iter().all(|point| point.is_finite()) {
            return Err(DiagramError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(center: Point, radius: f64, fill_color: Color) -> Self {
        Self {
            cx: center.x,
            cy: center.y,
            radius,
            fill_color,
        }
    }

    pub fn validate(self) -> DiagramResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(DiagramError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(DiagramError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_color: fill_color,
            border_width: 0.0,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> DiagramResult<()> {
        for (name, value) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("border_width", self.border_width),
            ("corner_radius", self.corner_radius),
        ] {
            if !value.is_finite() {
                return Err(DiagramError::InvalidData(format!(
                    "rect `{name}` must be finite"
                )));
            }
        }
        if self.width < 0.0 || self.height < 0.0 || self.border_width < 0.0 {
            return Err(DiagramError::InvalidData(
                "rect size and border width must be >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label. `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> DiagramResult<()> {
        if self.text.is_empty() {
            return Err(DiagramError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(DiagramError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(DiagramError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Fixed three-decimal text with trailing zeros dropped; never prints `-0`.
pub(crate) fn format_decimal(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, LinePrimitive, LineStrokeStyle, PathPrimitive, PolylinePrimitive};
    use crate::core::Point;

    #[test]
    fn color_renders_css_rgba() {
        assert_eq!(Color::from_rgb8(17, 24, 39, 0.75).to_css(), "rgba(17,24,39,0.75)");
        assert_eq!(Color::from_rgb8(17, 24, 39, 0.1 + 0.2).to_css(), "rgba(17,24,39,0.3)");
        assert_eq!(Color::from_rgb8(17, 24, 39, 1.0).to_css(), "rgba(17,24,39,1)");
        assert!(Color::rgba(1.2, 0.0, 0.0, 1.0).validate().is_err());
    }

    #[test]
    fn triangle_path_has_three_vertices() {
        let path = PathPrimitive::triangle(
            Point::new(0.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(0.0, 4.0),
            Color::rgb(0.1, 0.1, 0.1),
        );
        assert_eq!(path.points.len(), 3);
        assert!(path.validate().is_ok());
    }

    #[test]
    fn invalid_dash_pattern_is_rejected() {
        let line = LinePrimitive {
            stroke_style: LineStrokeStyle::Dashed {
                dash: 0.0,
                gap: 5.0,
            },
            ..LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 1.0, Color::rgb(0.0, 0.0, 0.0))
        };
        assert!(line.validate().is_err());

        let single = PolylinePrimitive::new(
            [Point::new(0.0, 0.0)],
            2.0,
            Color::rgb(0.0, 0.0, 0.0),
            LineStrokeStyle::Solid,
        );
        assert!(single.validate().is_err());
    }
}
