use cais_chart::core::{
    AxisProjectionMapper, CoordinateMapper, Dimension, LinearScale, LogicalFrame, Margins,
    SurveyState, Viewport,
};
use proptest::prelude::*;

fn dimension_strategy() -> impl Strategy<Value = Dimension> {
    prop::sample::select(Dimension::ALL.to_vec())
}

proptest! {
    #[test]
    fn x_is_strictly_increasing_in_value(
        width in 400.0f64..4_000.0,
        left in 0.0f64..150.0,
        right in 0.0f64..150.0,
        dimension in dimension_strategy(),
        value in 1u8..10
    ) {
        let frame = LogicalFrame {
            width,
            margins: Margins { left, right, ..Margins::default() },
            ..LogicalFrame::default()
        };
        let mapper = AxisProjectionMapper::new(frame).expect("valid frame");

        let lower = mapper.x_for_value(dimension, value);
        let upper = mapper.x_for_value(dimension, value + 1);
        prop_assert!(upper > lower);
        prop_assert!(lower >= left - 1e-9);
        prop_assert!(upper <= left + frame.axis_width() + 1e-9);
    }

    #[test]
    fn survey_scale_stays_inside_span(
        value in 1.0f64..=10.0,
        span_start in -1_000.0f64..1_000.0,
        span_width in 1.0f64..5_000.0
    ) {
        let px = LinearScale::survey().domain_to_span(value, span_start, span_width);
        prop_assert!(px >= span_start - 1e-9);
        prop_assert!(px <= span_start + span_width + 1e-9);
    }

    #[test]
    fn points_and_rows_ignore_surface_size(
        raw in prop::array::uniform4(-20i64..20),
        width in 1u32..4_000,
        height in 1u32..4_000
    ) {
        let mapper = AxisProjectionMapper::new(LogicalFrame::default()).expect("valid frame");
        let state = SurveyState::new(raw[0], raw[1], raw[2], raw[3]);
        let transform = mapper
            .surface_transform(Viewport::new(width, height))
            .expect("non-degenerate surface");

        let mut previous_y = f64::NEG_INFINITY;
        for (dimension, value) in state.iter() {
            let point = mapper.point_for(dimension, value);
            prop_assert!(point.y > previous_y);
            previous_y = point.y;

            let surface_point = transform.apply(point);
            prop_assert!(surface_point.x >= -1e-6 && surface_point.x <= f64::from(width) + 1e-6);
            prop_assert!(surface_point.y >= -1e-6 && surface_point.y <= f64::from(height) + 1e-6);
        }
    }
}

proptest! {
    #[test]
    fn resize_preserves_horizontal_ordering(
        raw in prop::array::uniform4(1i64..=10),
        first in (1u32..4_000, 1u32..4_000),
        second in (1u32..4_000, 1u32..4_000)
    ) {
        let mapper = AxisProjectionMapper::new(LogicalFrame::default()).expect("valid frame");
        let state = SurveyState::new(raw[0], raw[1], raw[2], raw[3]);
        let xs = |surface: Viewport| -> Vec<f64> {
            let transform = mapper.surface_transform(surface).expect("non-degenerate surface");
            state
                .iter()
                .map(|(dimension, value)| transform.apply(mapper.point_for(dimension, value)).x)
                .collect()
        };
        let before = xs(Viewport::new(first.0, first.1));
        let after = xs(Viewport::new(second.0, second.1));
        for i in 0..4 {
            for j in 0..4 {
                prop_assert_eq!(
                    before[i].partial_cmp(&before[j]),
                    after[i].partial_cmp(&after[j])
                );
            }
        }
    }
}
