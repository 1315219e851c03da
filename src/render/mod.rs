mod layer_stack;
mod null_renderer;
mod primitives;
mod scene;
mod svg_backend;

pub use layer_stack::SceneLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, PathPrimitive, PolylinePrimitive,
    RectPrimitive, TextHAlign, TextPrimitive,
};
pub use scene::{LayerPrimitives, Scene};
pub use svg_backend::{SvgRenderer, scene_to_svg};

use crate::error::DiagramResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `Scene` and only
/// execute its draw commands; they never see survey state or mapping logic.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> DiagramResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
