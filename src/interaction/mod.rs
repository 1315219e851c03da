use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{Dimension, Viewport, WidgetLayout};

/// External trigger for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DiagramEvent {
    /// The input collaborator reported a new raw value for a dimension.
    ValueChanged { dimension: Dimension, value: i64 },
    /// The render surface changed pixel size.
    Resized(Viewport),
    /// The host widgets moved; only meaningful for widget-relative mapping.
    LayoutChanged(WidgetLayout),
}

/// FIFO of pending triggers drained by `DiagramEngine::drain`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQueue {
    events: VecDeque<DiagramEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: DiagramEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<DiagramEvent> {
        self.events.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Extend<DiagramEvent> for EventQueue {
    fn extend<T: IntoIterator<Item = DiagramEvent>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}
