use crate::core::{
    BalancePolicy, CoordinateMapper, DerivedIndicators, Dimension, Point, SurveyState, VALUE_MAX,
    VALUE_MIN, Viewport,
};
use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, PolylinePrimitive, RectPrimitive, Scene,
    SceneLayerKind, TextHAlign, TextPrimitive,
};

use super::RenderStyle;

pub const GAP_INDICATOR_LABEL: &str = "Entrepreneurial Gap";

/// Vertical extent shared by all rows.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RowsExtent {
    top: f64,
    bottom: f64,
}

/// Builds the complete scene for one render pass.
///
/// Pure: the result depends only on the arguments, and every call starts
/// from an empty scene. Returns `None` when the surface or the mapper frame
/// has no area, in which case the pass draws nothing.
#[must_use]
pub fn build_scene<M: CoordinateMapper + ?Sized>(
    state: &SurveyState,
    surface: Viewport,
    mapper: &M,
    policy: BalancePolicy,
    style: &RenderStyle,
) -> Option<Scene> {
    let transform = mapper.surface_transform(surface)?;
    let indicators = DerivedIndicators::compute(state, mapper, policy);
    let mut scene = Scene::new(surface, transform, mapper.frame_size(), indicators);

    let rows = rows_extent(mapper);
    push_grid_layer(&mut scene, mapper, rows, style);
    push_rows_layer(&mut scene, state, mapper, style);
    push_trace_layer(&mut scene, state, mapper, style);
    let gap_y = push_gap_layer(&mut scene, state, mapper, rows, style);
    push_status_layer(&mut scene, mapper, gap_y, style);
    Some(scene)
}

fn rows_extent<M: CoordinateMapper + ?Sized>(mapper: &M) -> RowsExtent {
    Dimension::ALL.into_iter().map(|dimension| mapper.row_band(dimension)).fold(
        RowsExtent {
            top: f64::INFINITY,
            bottom: f64::NEG_INFINITY,
        },
        |extent, (top, bottom)| RowsExtent {
            top: extent.top.min(top),
            bottom: extent.bottom.max(bottom),
        },
    )
}

/// Value gridlines. The Control track is the reference axis; under axis
/// projection every row shares it.
fn push_grid_layer<M: CoordinateMapper + ?Sized>(
    scene: &mut Scene,
    mapper: &M,
    rows: RowsExtent,
    style: &RenderStyle,
) {
    for value in VALUE_MIN..=VALUE_MAX {
        let x = mapper.x_for_value(Dimension::Control, value);
        scene.push_line(
            SceneLayerKind::Grid,
            LinePrimitive::new(
                x,
                rows.top,
                x,
                rows.bottom,
                style.grid_line_width,
                style.grid_line_color,
            ),
        );
        scene.push_text(
            SceneLayerKind::Grid,
            TextPrimitive::new(
                value.to_string(),
                x,
                rows.top - style.grid_label_offset_px,
                style.grid_label_font_size_px,
                style.grid_label_color,
                TextHAlign::Center,
            ),
        );
    }
}

fn push_rows_layer<M: CoordinateMapper + ?Sized>(
    scene: &mut Scene,
    state: &SurveyState,
    mapper: &M,
    style: &RenderStyle,
) {
    let (frame_width, _) = mapper.frame_size();
    for dimension in Dimension::ALL {
        let (track_start, track_end) = mapper.track(dimension);
        let center_y = mapper.row_center_y(dimension);
        let (_, band_bottom) = mapper.row_band(dimension);
        let hint_y = band_bottom - style.hint_font_size_px * 0.5;

        scene.push_text(
            SceneLayerKind::Rows,
            TextPrimitive::new(
                dimension.label(),
                track_start - style.row_label_padding_px,
                baseline_for_center(center_y, style.row_label_font_size_px),
                style.row_label_font_size_px,
                style.row_label_color,
                TextHAlign::Right,
            ),
        );
        scene.push_text(
            SceneLayerKind::Rows,
            TextPrimitive::new(
                dimension.low_hint(),
                track_start,
                hint_y,
                style.hint_font_size_px,
                style.hint_color,
                TextHAlign::Left,
            ),
        );
        scene.push_text(
            SceneLayerKind::Rows,
            TextPrimitive::new(
                dimension.high_hint(),
                track_end,
                hint_y,
                style.hint_font_size_px,
                style.hint_color,
                TextHAlign::Right,
            ),
        );
        scene.push_text(
            SceneLayerKind::Rows,
            TextPrimitive::new(
                state.value(dimension).to_string(),
                track_end + style.value_label_padding_px,
                baseline_for_center(center_y, style.value_label_font_size_px),
                style.value_label_font_size_px,
                style.value_label_color,
                TextHAlign::Left,
            ),
        );
        scene.push_line(
            SceneLayerKind::Rows,
            LinePrimitive::new(
                0.0,
                band_bottom,
                frame_width,
                band_bottom,
                style.row_separator_width,
                style.row_separator_color,
            ),
        );
    }
}

fn push_trace_layer<M: CoordinateMapper + ?Sized>(
    scene: &mut Scene,
    state: &SurveyState,
    mapper: &M,
    style: &RenderStyle,
) {
    if let Some((first, second)) = scene.indicators.segments {
        for segment in [first, second] {
            scene.push_line(
                SceneLayerKind::Trace,
                LinePrimitive::new(
                    segment.start.x,
                    segment.start.y,
                    segment.end.x,
                    segment.end.y,
                    style.balance_segment_width,
                    style.balance_segment_color,
                ),
            );
        }
    }

    let points: Vec<Point> = Dimension::ALL
        .into_iter()
        .map(|dimension| mapper.point_for(dimension, state.value(dimension)))
        .collect();
    scene.push_polyline(
        SceneLayerKind::Trace,
        PolylinePrimitive::new(
            points.iter().copied(),
            style.trace_line_width,
            style.trace_color,
            style.trace_stroke_style,
        ),
    );
    for point in points {
        scene.push_circle(
            SceneLayerKind::Trace,
            CirclePrimitive::new(point, style.marker_radius_px, style.marker_color),
        );
    }
}

/// Double-headed arrow between the Control and Accountability positions.
/// Returns the arrow's `y`.
fn push_gap_layer<M: CoordinateMapper + ?Sized>(
    scene: &mut Scene,
    state: &SurveyState,
    mapper: &M,
    rows: RowsExtent,
    style: &RenderStyle,
) -> f64 {
    let control_x = mapper.x_for_value(Dimension::Control, state.value(Dimension::Control));
    let accountability_x = mapper.x_for_value(
        Dimension::Accountability,
        state.value(Dimension::Accountability),
    );
    let left = control_x.min(accountability_x);
    let right = control_x.max(accountability_x);
    let span = right - left;
    let y = rows.bottom + style.gap_offset_px;
    let half = style.gap_head_half_width_px;
    let kind = SceneLayerKind::GapIndicator;

    if span > 0.0 {
        let head = style.gap_head_length_px.min(span / 2.0);
        if right - head > left + head {
            scene.push_line(
                kind,
                LinePrimitive::new(
                    left + head,
                    y,
                    right - head,
                    y,
                    style.gap_line_width,
                    style.gap_color,
                )
                .with_round_cap(),
            );
        }
        scene.push_path(
            kind,
            PathPrimitive::triangle(
                Point::new(left + head, y - half),
                Point::new(left, y),
                Point::new(left + head, y + half),
                style.gap_color,
            ),
        );
        scene.push_path(
            kind,
            PathPrimitive::triangle(
                Point::new(right - head, y - half),
                Point::new(right, y),
                Point::new(right - head, y + half),
                style.gap_color,
            ),
        );
    } else {
        scene.push_line(
            kind,
            LinePrimitive::new(
                left,
                y - half,
                left,
                y + half,
                style.gap_line_width,
                style.gap_color,
            )
            .with_round_cap(),
        );
    }

    let center_x = (left + right) / 2.0;
    let gap_text = scene.gap_text.clone();
    scene.push_text(
        kind,
        TextPrimitive::new(
            gap_text,
            center_x,
            y - half - style.gap_value_font_size_px * 0.5,
            style.gap_value_font_size_px,
            style.gap_label_color,
            TextHAlign::Center,
        ),
    );
    scene.push_text(
        kind,
        TextPrimitive::new(
            GAP_INDICATOR_LABEL,
            center_x,
            y + style.gap_label_offset_px,
            style.gap_label_font_size_px,
            style.gap_label_color,
            TextHAlign::Center,
        ),
    );
    y
}

fn push_status_layer<M: CoordinateMapper + ?Sized>(
    scene: &mut Scene,
    mapper: &M,
    gap_y: f64,
    style: &RenderStyle,
) {
    let (track_start, track_end) = mapper.track(Dimension::Control);
    let banner = style.status_banner(scene.indicators.balance_class);
    let top = gap_y + style.status_offset_px;

    scene.push_rect(
        SceneLayerKind::Status,
        RectPrimitive::new(
            track_start,
            top,
            (track_end - track_start).max(0.0),
            style.status_height_px,
            banner.fill_color,
        )
        .with_border(style.status_border_width, banner.border_color)
        .with_corner_radius(style.status_corner_radius_px),
    );
    let status_text = scene.status_text.clone();
    scene.push_text(
        SceneLayerKind::Status,
        TextPrimitive::new(
            status_text,
            (track_start + track_end) / 2.0,
            baseline_for_center(top + style.status_height_px / 2.0, style.status_font_size_px),
            style.status_font_size_px,
            banner.text_color,
            TextHAlign::Center,
        ),
    );
}

/// Baseline that visually centers a line of text of `font_size_px` on `center_y`.
fn baseline_for_center(center_y: f64, font_size_px: f64) -> f64 {
    center_y + font_size_px * 0.35
}

#[cfg(test)]
mod tests {
    use super::{GAP_INDICATOR_LABEL, build_scene};
    use crate::api::RenderStyle;
    use crate::core::{
        AxisProjectionMapper, BalancePolicy, CoordinateMapper, Dimension, LogicalFrame,
        SurveyState, Viewport,
    };
    use crate::render::SceneLayerKind;

    fn mapper() -> AxisProjectionMapper {
        AxisProjectionMapper::new(LogicalFrame::default()).expect("valid frame")
    }

    #[test]
    fn zero_gap_draws_tick_instead_of_arrowheads() {
        let state = SurveyState::new(6, 6, 3, 3);
        let scene = build_scene(
            &state,
            Viewport::new(960, 560),
            &mapper(),
            BalancePolicy::Threshold,
            &RenderStyle::default(),
        )
        .expect("scene");

        let gap = scene.layer(SceneLayerKind::GapIndicator).expect("gap layer");
        assert!(gap.paths.is_empty());
        assert_eq!(gap.lines.len(), 1);
        assert_eq!(gap.lines[0].x1, gap.lines[0].x2);
        assert!(gap.texts.iter().any(|text| text.text == "0"));
        assert!(gap.texts.iter().any(|text| text.text == GAP_INDICATOR_LABEL));
    }

    #[test]
    fn short_gap_shrinks_arrowheads_to_span() {
        let mapper = mapper();
        let step = mapper.x_for_value(Dimension::Control, 2)
            - mapper.x_for_value(Dimension::Control, 1);
        let style = RenderStyle {
            gap_head_length_px: step * 2.0,
            ..RenderStyle::default()
        };

        let mut state = SurveyState::new(5, 5, 5, 5);
        state.set_value(Dimension::Accountability, 6);
        let scene = build_scene(
            &state,
            Viewport::new(960, 560),
            &mapper,
            BalancePolicy::Threshold,
            &style,
        )
        .expect("scene");

        let gap = scene.layer(SceneLayerKind::GapIndicator).expect("gap layer");
        assert_eq!(gap.paths.len(), 2);
        assert!(gap.lines.is_empty());
        let left_tip = gap.paths[0].points[1].x;
        let right_tip = gap.paths[1].points[1].x;
        assert!((right_tip - left_tip - step).abs() <= 1e-9);
    }

    #[test]
    fn geometric_policy_adds_balance_segments_to_trace() {
        let state = SurveyState::new(2, 9, 9, 2);
        let style = RenderStyle::default();
        let scene = build_scene(
            &state,
            Viewport::new(960, 560),
            &mapper(),
            BalancePolicy::Geometric,
            &style,
        )
        .expect("scene");

        let trace = scene.layer(SceneLayerKind::Trace).expect("trace layer");
        assert_eq!(trace.lines.len(), 2);
        assert_eq!(trace.polylines.len(), 1);
        assert_eq!(trace.circles.len(), 4);
    }
}
