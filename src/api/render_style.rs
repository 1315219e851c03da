use serde::{Deserialize, Serialize};

use crate::core::BalanceClass;
use crate::render::{Color, LineStrokeStyle};

/// Fill and text color of the status banner for one classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusBannerStyle {
    pub fill_color: Color,
    pub border_color: Color,
    pub text_color: Color,
}

/// Style contract for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub grid_label_color: Color,
    pub grid_label_font_size_px: f64,
    /// Gap between the top of the first row and the tick labels above it.
    pub grid_label_offset_px: f64,

    pub row_label_color: Color,
    pub row_label_font_size_px: f64,
    /// Horizontal gap between a row label and the start of its track.
    pub row_label_padding_px: f64,
    pub hint_color: Color,
    pub hint_font_size_px: f64,
    pub value_label_color: Color,
    pub value_label_font_size_px: f64,
    pub value_label_padding_px: f64,
    pub row_separator_color: Color,
    pub row_separator_width: f64,

    pub trace_color: Color,
    pub trace_line_width: f64,
    pub trace_stroke_style: LineStrokeStyle,
    pub marker_color: Color,
    pub marker_radius_px: f64,
    /// Color of the two balance-test segments drawn under the geometric policy.
    pub balance_segment_color: Color,
    pub balance_segment_width: f64,

    pub gap_color: Color,
    pub gap_line_width: f64,
    pub gap_head_length_px: f64,
    pub gap_head_half_width_px: f64,
    /// Vertical distance from the bottom of the last row to the gap arrow.
    pub gap_offset_px: f64,
    pub gap_label_color: Color,
    pub gap_label_font_size_px: f64,
    /// Baseline distance of the indicator name below the arrow.
    pub gap_label_offset_px: f64,
    pub gap_value_font_size_px: f64,

    /// Vertical distance from the gap arrow to the top of the status banner.
    pub status_offset_px: f64,
    pub status_height_px: f64,
    pub status_corner_radius_px: f64,
    pub status_font_size_px: f64,
    pub status_border_width: f64,
    pub status_balanced: StatusBannerStyle,
    pub status_overloaded: StatusBannerStyle,
    pub status_excess_capacity: StatusBannerStyle,
    pub status_imbalanced: StatusBannerStyle,
}

impl RenderStyle {
    #[must_use]
    pub fn status_banner(&self, class: BalanceClass) -> StatusBannerStyle {
        match class {
            BalanceClass::Balanced => self.status_balanced,
            BalanceClass::Overloaded => self.status_overloaded,
            BalanceClass::ExcessCapacity => self.status_excess_capacity,
            BalanceClass::Imbalanced => self.status_imbalanced,
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        let ink = Color::from_rgb8(15, 23, 42, 1.0);
        Self {
            grid_line_color: Color::from_rgb8(15, 23, 42, 0.08),
            grid_line_width: 1.0,
            grid_label_color: Color::from_rgb8(15, 23, 42, 0.45),
            grid_label_font_size_px: 11.0,
            grid_label_offset_px: 6.0,

            row_label_color: ink,
            row_label_font_size_px: 15.0,
            row_label_padding_px: 16.0,
            hint_color: Color::from_rgb8(15, 23, 42, 0.5),
            hint_font_size_px: 11.0,
            value_label_color: ink,
            value_label_font_size_px: 18.0,
            value_label_padding_px: 24.0,
            row_separator_color: Color::from_rgb8(15, 23, 42, 0.12),
            row_separator_width: 1.0,

            trace_color: Color::from_rgb8(17, 24, 39, 0.75),
            trace_line_width: 2.0,
            trace_stroke_style: LineStrokeStyle::Dashed {
                dash: 2.0,
                gap: 5.0,
            },
            marker_color: Color::from_rgb8(17, 24, 39, 0.9),
            marker_radius_px: 5.0,
            balance_segment_color: Color::from_rgb8(37, 99, 235, 0.5),
            balance_segment_width: 1.5,

            gap_color: Color::from_rgb8(15, 23, 42, 0.45),
            gap_line_width: 3.0,
            gap_head_length_px: 14.0,
            gap_head_half_width_px: 7.0,
            gap_offset_px: 48.0,
            gap_label_color: Color::from_rgb8(15, 23, 42, 0.55),
            gap_label_font_size_px: 18.0,
            gap_label_offset_px: 26.0,
            gap_value_font_size_px: 16.0,

            status_offset_px: 56.0,
            status_height_px: 44.0,
            status_corner_radius_px: 8.0,
            status_font_size_px: 16.0,
            status_border_width: 1.0,
            status_balanced: StatusBannerStyle {
                fill_color: Color::from_rgb8(220, 252, 231, 1.0),
                border_color: Color::from_rgb8(22, 163, 74, 1.0),
                text_color: Color::from_rgb8(20, 83, 45, 1.0),
            },
            status_overloaded: StatusBannerStyle {
                fill_color: Color::from_rgb8(254, 226, 226, 1.0),
                border_color: Color::from_rgb8(220, 38, 38, 1.0),
                text_color: Color::from_rgb8(127, 29, 29, 1.0),
            },
            status_excess_capacity: StatusBannerStyle {
                fill_color: Color::from_rgb8(254, 243, 199, 1.0),
                border_color: Color::from_rgb8(217, 119, 6, 1.0),
                text_color: Color::from_rgb8(120, 53, 15, 1.0),
            },
            status_imbalanced: StatusBannerStyle {
                fill_color: Color::from_rgb8(254, 226, 226, 1.0),
                border_color: Color::from_rgb8(190, 18, 60, 1.0),
                text_color: Color::from_rgb8(136, 19, 55, 1.0),
            },
        }
    }
}
