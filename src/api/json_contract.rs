use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, DiagramResult};
use crate::render::{Renderer, Scene};

use super::DiagramEngine;

pub const SCENE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneJsonContractV1 {
    pub schema_version: u32,
    pub scene: Scene,
}

impl Scene {
    pub fn to_json_pretty(&self) -> DiagramResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DiagramError::InvalidData(format!("failed to serialize scene: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> DiagramResult<String> {
        let payload = SceneJsonContractV1 {
            schema_version: SCENE_JSON_SCHEMA_V1,
            scene: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DiagramError::InvalidData(format!("failed to serialize scene contract v1: {e}"))
        })
    }

    /// Accepts either a bare scene or a versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> DiagramResult<Self> {
        if let Ok(scene) = serde_json::from_str::<Scene>(input) {
            return Ok(scene);
        }
        let payload: SceneJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DiagramError::InvalidData(format!("failed to parse scene json payload: {e}"))
        })?;
        if payload.schema_version != SCENE_JSON_SCHEMA_V1 {
            return Err(DiagramError::InvalidData(format!(
                "unsupported scene schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.scene)
    }
}

impl<R: Renderer> DiagramEngine<R> {
    /// Contract JSON of the last committed scene; `None` when the last pass was skipped.
    pub fn last_scene_json_contract_v1_pretty(&self) -> DiagramResult<Option<String>> {
        self.last_scene()
            .map(Scene::to_json_contract_v1_pretty)
            .transpose()
    }
}
