pub mod dimension;
pub mod mapper;
pub mod metrics;
pub mod scale;
pub mod survey;
pub mod types;
pub mod viewbox;

pub use dimension::Dimension;
pub use mapper::{
    AxisProjectionMapper, CoordinateMapper, LogicalFrame, Margins, WidgetLayout, WidgetRect,
    WidgetRelativeMapper,
};
pub use metrics::{
    BalanceClass, BalancePolicy, DerivedIndicators, Segment, balance_delta, classify_delta,
    demand, format_gap, gap, on_segment, orientation, segments_intersect, supply,
};
pub use scale::LinearScale;
pub use survey::{SurveyState, SurveyValues, VALUE_MAX, VALUE_MIN, clamp_value};
pub use types::{Point, Viewport};
pub use viewbox::SurfaceTransform;
