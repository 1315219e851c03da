use serde::{Deserialize, Serialize};

use super::{CoordinateMapper, Dimension, Point, SurveyState};

/// Which balance heuristic a diagram evaluates. Exactly one is active per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BalancePolicy {
    /// Compare supply (`Control + Support`) against demand
    /// (`Accountability + Influence`); `|delta| <= 1` is balanced.
    #[default]
    Threshold,
    /// Balanced when the Control-Influence and Accountability-Support segments
    /// intersect or touch.
    Geometric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceClass {
    Balanced,
    Overloaded,
    ExcessCapacity,
    /// Produced only by `BalancePolicy::Geometric`.
    Imbalanced,
}

impl BalanceClass {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Balanced => "This job is balanced.",
            Self::Overloaded => "This job is overloaded.",
            Self::ExcessCapacity => "This job has excess capacity.",
            Self::Imbalanced => "This job is out of balance.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// `Accountability - Control`, in `[-9, 9]`.
#[must_use]
pub fn gap(state: &SurveyState) -> i32 {
    i32::from(state.value(Dimension::Accountability)) - i32::from(state.value(Dimension::Control))
}

/// Signed gap label: `+3`, `0`, `-2`.
#[must_use]
pub fn format_gap(gap: i32) -> String {
    if gap > 0 {
        format!("+{gap}")
    } else {
        gap.to_string()
    }
}

#[must_use]
pub fn demand(state: &SurveyState) -> i32 {
    i32::from(state.value(Dimension::Accountability)) + i32::from(state.value(Dimension::Influence))
}

#[must_use]
pub fn supply(state: &SurveyState) -> i32 {
    i32::from(state.value(Dimension::Control)) + i32::from(state.value(Dimension::Support))
}

/// `supply - demand`.
#[must_use]
pub fn balance_delta(state: &SurveyState) -> i32 {
    supply(state) - demand(state)
}

#[must_use]
pub fn classify_delta(delta: i32) -> BalanceClass {
    match delta {
        -1..=1 => BalanceClass::Balanced,
        d if d < -1 => BalanceClass::Overloaded,
        _ => BalanceClass::ExcessCapacity,
    }
}

/// Twice the signed area of triangle `(p, q, r)`; positive when counter-clockwise.
#[must_use]
pub fn orientation(p: Point, q: Point, r: Point) -> f64 {
    (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
}

/// Whether `r` lies inside the bounding box of segment `(p, q)`.
#[must_use]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
}

/// Orientation-sign intersection test.
///
/// Proper crossings need strictly opposite, nonzero signs on both pairs. A
/// zero orientation counts as touching when the tested point falls inside the
/// other segment's bounding box. Some overlapping collinear configurations are
/// only approximated by this rule.
#[must_use]
pub fn segments_intersect(first: Segment, second: Segment) -> bool {
    let (a, b) = (first.start, first.end);
    let (c, d) = (second.start, second.end);
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    let opposite = |u: f64, v: f64| (u > 0.0 && v < 0.0) || (u < 0.0 && v > 0.0);
    if opposite(o1, o2) && opposite(o3, o4) {
        return true;
    }

    (o1 == 0.0 && on_segment(a, b, c))
        || (o2 == 0.0 && on_segment(a, b, d))
        || (o3 == 0.0 && on_segment(c, d, a))
        || (o4 == 0.0 && on_segment(c, d, b))
}

/// Per-pass snapshot of the secondary indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedIndicators {
    pub gap: i32,
    pub policy: BalancePolicy,
    pub balance_class: BalanceClass,
    /// `supply - demand`; present for the threshold policy.
    pub delta: Option<i32>,
    /// `(Control, Influence)` and `(Accountability, Support)`; present for the geometric policy.
    pub segments: Option<(Segment, Segment)>,
}

impl DerivedIndicators {
    #[must_use]
    pub fn compute<M: CoordinateMapper + ?Sized>(
        state: &SurveyState,
        mapper: &M,
        policy: BalancePolicy,
    ) -> Self {
        let gap = gap(state);
        match policy {
            BalancePolicy::Threshold => {
                let delta = balance_delta(state);
                Self {
                    gap,
                    policy,
                    balance_class: classify_delta(delta),
                    delta: Some(delta),
                    segments: None,
                }
            }
            BalancePolicy::Geometric => {
                let point =
                    |dimension: Dimension| mapper.point_for(dimension, state.value(dimension));
                let first = Segment::new(point(Dimension::Control), point(Dimension::Influence));
                let second =
                    Segment::new(point(Dimension::Accountability), point(Dimension::Support));
                let balance_class = if segments_intersect(first, second) {
                    BalanceClass::Balanced
                } else {
                    BalanceClass::Imbalanced
                };
                Self {
                    gap,
                    policy,
                    balance_class,
                    delta: None,
                    segments: Some((first, second)),
                }
            }
        }
    }

    #[must_use]
    pub fn gap_text(&self) -> String {
        format_gap(self.gap)
    }

    #[must_use]
    pub fn status_text(&self) -> &'static str {
        self.balance_class.message()
    }
}
