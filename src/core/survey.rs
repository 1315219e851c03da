use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Dimension;

/// Lowest legal survey value.
pub const VALUE_MIN: u8 = 1;
/// Highest legal survey value.
pub const VALUE_MAX: u8 = 10;

/// Clamps raw input into `[VALUE_MIN, VALUE_MAX]`.
#[must_use]
pub fn clamp_value(raw: i64) -> u8 {
    // Bounded by the clamp, so the narrowing cast cannot truncate.
    raw.clamp(i64::from(VALUE_MIN), i64::from(VALUE_MAX)) as u8
}

/// Current value for every dimension. Always complete, always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SurveyValues", into = "SurveyValues")]
pub struct SurveyState {
    values: [u8; 4],
}

/// Serialized shape of `SurveyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyValues {
    pub control: i64,
    pub accountability: i64,
    pub influence: i64,
    pub support: i64,
}

impl Default for SurveyState {
    fn default() -> Self {
        Self { values: [5; 4] }
    }
}

impl SurveyState {
    /// Builds a state from raw values, clamping each one into range.
    #[must_use]
    pub fn new(control: i64, accountability: i64, influence: i64, support: i64) -> Self {
        Self {
            values: [
                clamp_value(control),
                clamp_value(accountability),
                clamp_value(influence),
                clamp_value(support),
            ],
        }
    }

    #[must_use]
    pub fn value(&self, dimension: Dimension) -> u8 {
        self.values[dimension.row_index()]
    }

    /// Stores `raw` for `dimension`, clamped into range. Returns the stored value.
    pub fn set_value(&mut self, dimension: Dimension, raw: i64) -> u8 {
        let value = clamp_value(raw);
        if i64::from(value) != raw {
            warn!(
                dimension = dimension.key(),
                raw,
                clamped = value,
                "survey value out of range"
            );
        }
        self.values[dimension.row_index()] = value;
        value
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        Dimension::ALL
            .into_iter()
            .map(|dimension| (dimension, self.value(dimension)))
    }
}

impl From<SurveyState> for SurveyValues {
    fn from(state: SurveyState) -> Self {
        Self {
            control: i64::from(state.value(Dimension::Control)),
            accountability: i64::from(state.value(Dimension::Accountability)),
            influence: i64::from(state.value(Dimension::Influence)),
            support: i64::from(state.value(Dimension::Support)),
        }
    }
}

impl TryFrom<SurveyValues> for SurveyState {
    type Error = String;

    fn try_from(values: SurveyValues) -> Result<Self, Self::Error> {
        let range = i64::from(VALUE_MIN)..=i64::from(VALUE_MAX);
        for (name, value) in [
            ("control", values.control),
            ("accountability", values.accountability),
            ("influence", values.influence),
            ("support", values.support),
        ] {
            if !range.contains(&value) {
                return Err(format!(
                    "survey value `{name}` must be in [{VALUE_MIN}, {VALUE_MAX}], got {value}"
                ));
            }
        }
        Ok(Self::new(
            values.control,
            values.accountability,
            values.influence,
            values.support,
        ))
    }
}
