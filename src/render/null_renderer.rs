use crate::error::DiagramResult;
use crate::render::{Renderer, Scene};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates scene content so invalid geometry is caught without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub passes: usize,
    pub last_primitive_count: usize,
    pub last_text_count: usize,
    pub last_status_text: Option<String>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> DiagramResult<()> {
        scene.validate()?;
        self.passes += 1;
        self.last_primitive_count = scene.primitive_count();
        self.last_text_count = scene.layers.iter().map(|layer| layer.texts.len()).sum();
        self.last_status_text = Some(scene.status_text.clone());
        Ok(())
    }
}
