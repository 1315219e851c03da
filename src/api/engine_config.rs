use serde::{Deserialize, Serialize};

use crate::core::{BalancePolicy, LogicalFrame, SurveyState, Viewport};
use crate::error::{DiagramError, DiagramResult};

/// How survey values are placed on the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MappingStrategy {
    /// Fixed logical frame fitted onto the surface with a scale-preserving transform.
    #[default]
    AxisProjection,
    /// Live geometry of the host's input widgets, supplied through
    /// `DiagramEngine::set_widget_layout`.
    WidgetRelative,
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can ship diagram setup as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramEngineConfig {
    pub surface: Viewport,
    #[serde(default)]
    pub frame: LogicalFrame,
    #[serde(default)]
    pub mapping: MappingStrategy,
    #[serde(default)]
    pub balance_policy: BalancePolicy,
    #[serde(default)]
    pub initial_state: SurveyState,
}

impl DiagramEngineConfig {
    /// Creates a config with the default frame, axis projection and threshold balance.
    #[must_use]
    pub fn new(surface: Viewport) -> Self {
        Self {
            surface,
            frame: LogicalFrame::default(),
            mapping: MappingStrategy::default(),
            balance_policy: BalancePolicy::default(),
            initial_state: SurveyState::default(),
        }
    }

    #[must_use]
    pub fn with_frame(mut self, frame: LogicalFrame) -> Self {
        self.frame = frame;
        self
    }

    #[must_use]
    pub fn with_mapping(mut self, mapping: MappingStrategy) -> Self {
        self.mapping = mapping;
        self
    }

    #[must_use]
    pub fn with_balance_policy(mut self, balance_policy: BalancePolicy) -> Self {
        self.balance_policy = balance_policy;
        self
    }

    #[must_use]
    pub fn with_initial_state(mut self, initial_state: SurveyState) -> Self {
        self.initial_state = initial_state;
        self
    }

    pub fn to_json_pretty(&self) -> DiagramResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DiagramError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> DiagramResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DiagramError::InvalidConfig(format!("failed to parse config json: {e}")))
    }
}
