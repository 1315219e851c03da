use serde::{Deserialize, Serialize};

use super::{Point, Viewport};

/// Uniform scale plus centring offset from frame space onto surface pixels.
///
/// Fitting keeps the aspect ratio of the frame (SVG `xMidYMid meet`), so a
/// resize changes only this transform and never the frame-space geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl SurfaceTransform {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Returns `None` when either the frame or the surface has no area.
    #[must_use]
    pub fn fit(frame_width: f64, frame_height: f64, surface: Viewport) -> Option<Self> {
        if !surface.is_valid() || !is_positive(frame_width) || !is_positive(frame_height) {
            return None;
        }

        let surface_width = f64::from(surface.width);
        let surface_height = f64::from(surface.height);
        let scale = (surface_width / frame_width).min(surface_height / frame_height);
        Some(Self {
            scale,
            offset_x: (surface_width - frame_width * scale) / 2.0,
            offset_y: (surface_height - frame_height * scale) / 2.0,
        })
    }

    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            self.offset_x + point.x * self.scale,
            self.offset_y + point.y * self.scale,
        )
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::SurfaceTransform;
    use crate::core::{Point, Viewport};

    #[test]
    fn fit_letterboxes_wide_surface() {
        let transform =
            SurfaceTransform::fit(100.0, 50.0, Viewport::new(400, 100)).expect("valid surface");
        assert_eq!(transform.scale, 2.0);
        assert_eq!(transform.offset_x, 100.0);
        assert_eq!(transform.offset_y, 0.0);

        let mapped = transform.apply(Point::new(100.0, 50.0));
        assert_eq!(mapped, Point::new(300.0, 100.0));
    }

    #[test]
    fn zero_sized_surface_has_no_transform() {
        assert!(SurfaceTransform::fit(100.0, 50.0, Viewport::new(0, 300)).is_none());
        assert!(SurfaceTransform::fit(100.0, 50.0, Viewport::new(300, 0)).is_none());
        assert!(SurfaceTransform::fit(0.0, 50.0, Viewport::new(300, 300)).is_none());
    }
}
