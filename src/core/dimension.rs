use serde::{Deserialize, Serialize};

/// One of the four job-design spans captured by the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Control,
    Accountability,
    Influence,
    Support,
}

impl Dimension {
    /// All dimensions in row order. Also the order the trace polyline visits them.
    pub const ALL: [Dimension; 4] = [
        Dimension::Control,
        Dimension::Accountability,
        Dimension::Influence,
        Dimension::Support,
    ];

    /// Fixed layout slot, `0..=3`.
    #[must_use]
    pub const fn row_index(self) -> usize {
        match self {
            Self::Control => 0,
            Self::Accountability => 1,
            Self::Influence => 2,
            Self::Support => 3,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Control => "control",
            Self::Accountability => "accountability",
            Self::Influence => "influence",
            Self::Support => "support",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Control => "Span of Control",
            Self::Accountability => "Span of Accountability",
            Self::Influence => "Span of Influence",
            Self::Support => "Span of Support",
        }
    }

    /// Meaning of the low end of the scale.
    #[must_use]
    pub const fn low_hint(self) -> &'static str {
        match self {
            Self::Control => "Few resources",
            Self::Accountability => "Narrow measures",
            Self::Influence => "Little reliance on others",
            Self::Support => "Little help available",
        }
    }

    /// Meaning of the high end of the scale.
    #[must_use]
    pub const fn high_hint(self) -> &'static str {
        match self {
            Self::Control => "Many resources",
            Self::Accountability => "Broad measures",
            Self::Influence => "Heavy reliance on others",
            Self::Support => "Strong help available",
        }
    }
}
