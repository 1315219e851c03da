use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::DiagramResult;
use crate::interaction::{DiagramEvent, EventQueue};
use crate::render::Renderer;

use super::DiagramEngine;
use super::engine::ActiveMapper;

/// Why a pass drew nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Surface or widget host has zero width or height.
    DegenerateSurface,
    /// Widget-relative mapping has not received a layout yet.
    MissingWidgetLayout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderOutcome {
    Drawn,
    Skipped(SkipReason),
    /// The trigger itself or the backend failed; logged, never propagated.
    Failed { error: String },
}

impl<R: Renderer> DiagramEngine<R> {
    /// Runs one full pass: drop the previous scene, rebuild from current
    /// inputs, hand the new scene to the renderer.
    pub fn render(&mut self) -> DiagramResult<RenderOutcome> {
        self.last_scene = None;

        let Some(scene) = self.build_scene() else {
            let reason = self.skip_reason();
            debug!(
                ?reason,
                width = self.surface.width,
                height = self.surface.height,
                "render pass skipped"
            );
            return Ok(RenderOutcome::Skipped(reason));
        };

        self.renderer.render(&scene)?;
        self.render_passes += 1;
        trace!(
            pass = self.render_passes,
            primitives = scene.primitive_count(),
            gap = %scene.gap_text,
            status = %scene.status_text,
            "render pass committed"
        );
        self.last_scene = Some(scene);
        Ok(RenderOutcome::Drawn)
    }

    /// Applies one external trigger and renders.
    ///
    /// This is the input-handler entry point: errors are logged and reported
    /// in the outcome instead of being returned.
    pub fn handle_event(&mut self, event: DiagramEvent) -> RenderOutcome {
        match event {
            DiagramEvent::ValueChanged { dimension, value } => {
                self.set_value(dimension, value);
            }
            DiagramEvent::Resized(surface) => self.resize(surface),
            DiagramEvent::LayoutChanged(layout) => {
                if let Err(err) = self.set_widget_layout(layout) {
                    warn!(error = %err, "ignoring widget layout update");
                    return RenderOutcome::Failed {
                        error: err.to_string(),
                    };
                }
            }
        }

        match self.render() {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "render pass failed");
                RenderOutcome::Failed {
                    error: err.to_string(),
                }
            }
        }
    }

    /// Drains `queue` in FIFO order, one complete pass per event.
    pub fn drain(&mut self, queue: &mut EventQueue) -> Vec<RenderOutcome> {
        let mut outcomes = Vec::with_capacity(queue.len());
        while let Some(event) = queue.pop() {
            outcomes.push(self.handle_event(event));
        }
        outcomes
    }

    fn skip_reason(&self) -> SkipReason {
        match self.mapper {
            ActiveMapper::Widget(None) => SkipReason::MissingWidgetLayout,
            _ => SkipReason::DegenerateSurface,
        }
    }
}
