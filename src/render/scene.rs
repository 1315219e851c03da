use serde::{Deserialize, Serialize};

use crate::core::{DerivedIndicators, SurfaceTransform, Viewport};
use crate::error::{DiagramError, DiagramResult};

use super::{
    CirclePrimitive, LinePrimitive, PathPrimitive, PolylinePrimitive, RectPrimitive,
    SceneLayerKind, TextPrimitive,
};

/// Primitives of one layer. Backends draw them in field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub kind: SceneLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: SceneLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            polylines: Vec::new(),
            paths: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.rects.len()
            + self.lines.len()
            + self.polylines.len()
            + self.paths.len()
            + self.circles.len()
            + self.texts.len()
    }

    pub fn validate(&self) -> DiagramResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic, fully rebuilt output of one render pass.
///
/// Primitive coordinates live in frame space; `transform` places the frame on
/// the physical surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub surface: Viewport,
    pub transform: SurfaceTransform,
    pub frame_width: f64,
    pub frame_height: f64,
    pub layers: Vec<LayerPrimitives>,
    pub indicators: DerivedIndicators,
    pub gap_text: String,
    pub status_text: String,
}

impl Scene {
    /// Creates a scene with every canonical layer present and empty.
    #[must_use]
    pub fn new(
        surface: Viewport,
        transform: SurfaceTransform,
        (frame_width, frame_height): (f64, f64),
        indicators: DerivedIndicators,
    ) -> Self {
        Self {
            surface,
            transform,
            frame_width,
            frame_height,
            layers: SceneLayerKind::CANONICAL
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
            gap_text: indicators.gap_text(),
            status_text: indicators.status_text().to_owned(),
            indicators,
        }
    }

    #[must_use]
    pub fn layer(&self, kind: SceneLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn push_rect(&mut self, kind: SceneLayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    pub fn push_line(&mut self, kind: SceneLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_polyline(&mut self, kind: SceneLayerKind, polyline: PolylinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.polylines.push(polyline);
        }
    }

    pub fn push_path(&mut self, kind: SceneLayerKind, path: PathPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.paths.push(path);
        }
    }

    pub fn push_circle(&mut self, kind: SceneLayerKind, circle: CirclePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.circles.push(circle);
        }
    }

    pub fn push_text(&mut self, kind: SceneLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.layers.iter().map(LayerPrimitives::primitive_count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }

    pub fn validate(&self) -> DiagramResult<()> {
        if !self.surface.is_valid() {
            return Err(DiagramError::InvalidViewport {
                width: self.surface.width,
                height: self.surface.height,
            });
        }
        if !self.transform.scale.is_finite() || self.transform.scale <= 0.0 {
            return Err(DiagramError::InvalidData(
                "surface transform scale must be finite and > 0".to_owned(),
            ));
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    fn layer_mut(&mut self, kind: SceneLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
