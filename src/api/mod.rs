mod engine;
mod engine_config;
mod json_contract;
mod render_coordinator;
mod render_style;
mod scene_builder;
mod validation;

pub use engine::DiagramEngine;
pub use engine_config::{DiagramEngineConfig, MappingStrategy};
pub use json_contract::{SCENE_JSON_SCHEMA_V1, SceneJsonContractV1};
pub use render_coordinator::{RenderOutcome, SkipReason};
pub use render_style::{RenderStyle, StatusBannerStyle};
pub use scene_builder::{GAP_INDICATOR_LABEL, build_scene};
