//! cais-chart: live job-design diagram engine.
//!
//! Translates four ordinal survey values (Control, Accountability, Influence,
//! Support) into a layered vector scene. The domain core maps values to
//! geometry and derives the gap and balance indicators; rendering backends
//! only execute the primitive list they receive.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DiagramEngine, DiagramEngineConfig, build_scene};
pub use error::{DiagramError, DiagramResult};
