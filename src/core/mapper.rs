use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, DiagramResult};

use super::{Dimension, LinearScale, Point, SurfaceTransform, Viewport};

/// Converts a dimension's value into a point in frame space.
///
/// Every layer of a scene is laid out through one mapper, so the trace, the
/// grid and the gap indicator always agree on where a value sits.
pub trait CoordinateMapper {
    /// Width and height of the coordinate frame the mapper produces points in.
    fn frame_size(&self) -> (f64, f64);

    /// Horizontal start and end of the value track for `dimension`.
    fn track(&self, dimension: Dimension) -> (f64, f64);

    fn row_center_y(&self, dimension: Dimension) -> f64;

    /// Vertical extent `(top, bottom)` of the row slot for `dimension`.
    fn row_band(&self, dimension: Dimension) -> (f64, f64);

    /// Transform placing frame space onto `surface`; `None` skips the pass.
    fn surface_transform(&self, surface: Viewport) -> Option<SurfaceTransform>;

    fn x_for_value(&self, dimension: Dimension, value: u8) -> f64 {
        let (start, end) = self.track(dimension);
        LinearScale::survey().domain_to_span(f64::from(value), start, end - start)
    }

    fn point_for(&self, dimension: Dimension, value: u8) -> Point {
        Point::new(
            self.x_for_value(dimension, value),
            self.row_center_y(dimension),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 24.0,
            right: 120.0,
            bottom: 150.0,
            left: 240.0,
        }
    }
}

/// Fixed logical coordinate frame for the axis-projection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogicalFrame {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margins: Margins,
    pub first_row_y: f64,
    pub row_height: f64,
}

impl Default for LogicalFrame {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 560.0,
            margins: Margins::default(),
            first_row_y: 64.0,
            row_height: 72.0,
        }
    }
}

impl LogicalFrame {
    /// `W - left - right`.
    #[must_use]
    pub fn axis_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    pub fn validate(&self) -> DiagramResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("row_height", self.row_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DiagramError::InvalidConfig(format!(
                    "frame `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("margins.top", self.margins.top),
            ("margins.right", self.margins.right),
            ("margins.bottom", self.margins.bottom),
            ("margins.left", self.margins.left),
            ("first_row_y", self.first_row_y),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DiagramError::InvalidConfig(format!(
                    "frame `{name}` must be finite and >= 0"
                )));
            }
        }
        if self.axis_width() <= 0.0 {
            return Err(DiagramError::InvalidConfig(
                "frame horizontal margins leave no room for the value axis".to_owned(),
            ));
        }
        let last_row = (Dimension::ALL.len() - 1) as f64;
        let rows_bottom = self.first_row_y + last_row * self.row_height + self.row_height / 2.0;
        if rows_bottom > self.height {
            return Err(DiagramError::InvalidConfig(format!(
                "frame rows end at {rows_bottom} but the frame is only {} tall",
                self.height
            )));
        }
        Ok(())
    }
}

/// Axis-projection strategy: value to `x` along a shared axis, dimension to a
/// fixed row slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisProjectionMapper {
    frame: LogicalFrame,
}

impl AxisProjectionMapper {
    pub fn new(frame: LogicalFrame) -> DiagramResult<Self> {
        frame.validate()?;
        Ok(Self { frame })
    }

    #[must_use]
    pub fn frame(&self) -> LogicalFrame {
        self.frame
    }
}

impl CoordinateMapper for AxisProjectionMapper {
    fn frame_size(&self) -> (f64, f64) {
        (self.frame.width, self.frame.height)
    }

    fn track(&self, _dimension: Dimension) -> (f64, f64) {
        let start = self.frame.margins.left;
        (start, start + self.frame.axis_width())
    }

    fn row_center_y(&self, dimension: Dimension) -> f64 {
        self.frame.first_row_y + dimension.row_index() as f64 * self.frame.row_height
    }

    fn row_band(&self, dimension: Dimension) -> (f64, f64) {
        let center = self.row_center_y(dimension);
        let half = self.frame.row_height / 2.0;
        (center - half, center + half)
    }

    fn surface_transform(&self, surface: Viewport) -> Option<SurfaceTransform> {
        SurfaceTransform::fit(self.frame.width, self.frame.height, surface)
    }
}

/// On-screen rectangle in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WidgetRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

/// Live bounding geometry of the host container and the four input tracks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetLayout {
    pub host: WidgetRect,
    /// Indexed by `Dimension::row_index`.
    pub tracks: [WidgetRect; 4],
}

impl WidgetLayout {
    #[must_use]
    pub fn track(&self, dimension: Dimension) -> WidgetRect {
        self.tracks[dimension.row_index()]
    }

    pub fn validate(&self) -> DiagramResult<()> {
        if !self.host.is_finite() || self.host.width < 0.0 || self.host.height < 0.0 {
            return Err(DiagramError::InvalidData(
                "widget host rect must be finite with non-negative size".to_owned(),
            ));
        }
        for dimension in Dimension::ALL {
            let track = self.track(dimension);
            if !track.is_finite() || track.width < 0.0 || track.height < 0.0 {
                return Err(DiagramError::InvalidData(format!(
                    "widget track `{}` must be finite with non-negative size",
                    dimension.key()
                )));
            }
        }
        Ok(())
    }
}

/// Widget-relative strategy: points follow the live geometry of each input
/// control, relative to the host container origin.
///
/// Must be rebuilt whenever the host layout changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetRelativeMapper {
    layout: WidgetLayout,
}

impl WidgetRelativeMapper {
    pub fn new(layout: WidgetLayout) -> DiagramResult<Self> {
        layout.validate()?;
        Ok(Self { layout })
    }

    #[must_use]
    pub fn layout(&self) -> WidgetLayout {
        self.layout
    }
}

impl CoordinateMapper for WidgetRelativeMapper {
    fn frame_size(&self) -> (f64, f64) {
        (self.layout.host.width, self.layout.host.height)
    }

    fn track(&self, dimension: Dimension) -> (f64, f64) {
        let rect = self.layout.track(dimension);
        let start = rect.x - self.layout.host.x;
        (start, start + rect.width)
    }

    fn row_center_y(&self, dimension: Dimension) -> f64 {
        let rect = self.layout.track(dimension);
        rect.y - self.layout.host.y + rect.height / 2.0
    }

    fn row_band(&self, dimension: Dimension) -> (f64, f64) {
        let rect = self.layout.track(dimension);
        let top = rect.y - self.layout.host.y;
        (top, top + rect.height)
    }

    fn surface_transform(&self, surface: Viewport) -> Option<SurfaceTransform> {
        let (width, height) = self.frame_size();
        if !surface.is_valid() || width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(SurfaceTransform::identity())
    }
}
