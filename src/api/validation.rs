use crate::error::{DiagramError, DiagramResult};

use super::{DiagramEngineConfig, RenderStyle, StatusBannerStyle};

pub(super) fn validate_render_style(style: RenderStyle) -> DiagramResult<RenderStyle> {
    for (name, color) in [
        ("grid_line_color", style.grid_line_color),
        ("grid_label_color", style.grid_label_color),
        ("row_label_color", style.row_label_color),
        ("hint_color", style.hint_color),
        ("value_label_color", style.value_label_color),
        ("row_separator_color", style.row_separator_color),
        ("trace_color", style.trace_color),
        ("marker_color", style.marker_color),
        ("balance_segment_color", style.balance_segment_color),
        ("gap_color", style.gap_color),
        ("gap_label_color", style.gap_label_color),
    ] {
        color.validate().map_err(|err| {
            DiagramError::InvalidData(format!("render style `{name}` is invalid: {err}"))
        })?;
    }

    for (name, banner) in [
        ("status_balanced", style.status_balanced),
        ("status_overloaded", style.status_overloaded),
        ("status_excess_capacity", style.status_excess_capacity),
        ("status_imbalanced", style.status_imbalanced),
    ] {
        validate_status_banner(name, banner)?;
    }

    for (name, value) in [
        ("grid_line_width", style.grid_line_width),
        ("grid_label_font_size_px", style.grid_label_font_size_px),
        ("row_label_font_size_px", style.row_label_font_size_px),
        ("hint_font_size_px", style.hint_font_size_px),
        ("value_label_font_size_px", style.value_label_font_size_px),
        ("row_separator_width", style.row_separator_width),
        ("trace_line_width", style.trace_line_width),
        ("marker_radius_px", style.marker_radius_px),
        ("balance_segment_width", style.balance_segment_width),
        ("gap_line_width", style.gap_line_width),
        ("gap_head_length_px", style.gap_head_length_px),
        ("gap_head_half_width_px", style.gap_head_half_width_px),
        ("gap_label_font_size_px", style.gap_label_font_size_px),
        ("gap_value_font_size_px", style.gap_value_font_size_px),
        ("status_height_px", style.status_height_px),
        ("status_font_size_px", style.status_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(DiagramError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("grid_label_offset_px", style.grid_label_offset_px),
        ("row_label_padding_px", style.row_label_padding_px),
        ("value_label_padding_px", style.value_label_padding_px),
        ("gap_offset_px", style.gap_offset_px),
        ("gap_label_offset_px", style.gap_label_offset_px),
        ("status_offset_px", style.status_offset_px),
        ("status_corner_radius_px", style.status_corner_radius_px),
        ("status_border_width", style.status_border_width),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(DiagramError::InvalidData(format!(
                "render style `{name}` must be finite and >= 0"
            )));
        }
    }

    style.trace_stroke_style.validate()?;
    Ok(style)
}

fn validate_status_banner(name: &str, banner: StatusBannerStyle) -> DiagramResult<()> {
    for color in [banner.fill_color, banner.border_color, banner.text_color] {
        color.validate().map_err(|err| {
            DiagramError::InvalidData(format!("render style `{name}` is invalid: {err}"))
        })?;
    }
    Ok(())
}

pub(super) fn validate_engine_config(config: &DiagramEngineConfig) -> DiagramResult<()> {
    config.frame.validate()
}
