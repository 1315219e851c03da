use tracing::{debug, trace};

use crate::core::{
    AxisProjectionMapper, CoordinateMapper, Dimension, LogicalFrame, SurveyState, Viewport,
    WidgetLayout, WidgetRelativeMapper,
};
use crate::error::{DiagramError, DiagramResult};
use crate::render::{Renderer, Scene};

use super::validation::{validate_engine_config, validate_render_style};
use super::{DiagramEngineConfig, MappingStrategy, RenderStyle, build_scene};

/// The mapper selected by `MappingStrategy`, fixed for the engine's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum ActiveMapper {
    Axis(AxisProjectionMapper),
    /// `None` until the host reports its first widget layout.
    Widget(Option<WidgetRelativeMapper>),
}

/// Main orchestration facade consumed by host applications.
///
/// `DiagramEngine` owns the survey state and the surface size, and runs one
/// full render pass per trigger through the configured renderer.
pub struct DiagramEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: DiagramEngineConfig,
    pub(super) style: RenderStyle,
    pub(super) state: SurveyState,
    pub(super) surface: Viewport,
    pub(super) mapper: ActiveMapper,
    pub(super) last_scene: Option<Scene>,
    pub(super) render_passes: u64,
}

impl<R: Renderer> DiagramEngine<R> {
    /// Creates an engine with the default render style.
    ///
    /// A zero-sized surface is accepted; passes are skipped until a resize.
    pub fn new(renderer: R, config: DiagramEngineConfig) -> DiagramResult<Self> {
        validate_engine_config(&config)?;
        let mapper = match config.mapping {
            MappingStrategy::AxisProjection => {
                ActiveMapper::Axis(AxisProjectionMapper::new(config.frame)?)
            }
            MappingStrategy::WidgetRelative => ActiveMapper::Widget(None),
        };
        debug!(
            width = config.surface.width,
            height = config.surface.height,
            mapping = ?config.mapping,
            policy = ?config.balance_policy,
            "diagram engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            style: RenderStyle::default(),
            state: config.initial_state,
            surface: config.surface,
            mapper,
            last_scene: None,
            render_passes: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> DiagramEngineConfig {
        self.config
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> DiagramResult<()> {
        self.style = validate_render_style(style)?;
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> SurveyState {
        self.state
    }

    #[must_use]
    pub fn value(&self, dimension: Dimension) -> u8 {
        self.state.value(dimension)
    }

    #[must_use]
    pub fn surface(&self) -> Viewport {
        self.surface
    }

    /// Logical frame of the axis-projection strategy, if active.
    #[must_use]
    pub fn logical_frame(&self) -> Option<LogicalFrame> {
        match self.mapper {
            ActiveMapper::Axis(mapper) => Some(mapper.frame()),
            ActiveMapper::Widget(_) => None,
        }
    }

    /// Scene committed by the most recent pass; `None` after a skipped pass.
    #[must_use]
    pub fn last_scene(&self) -> Option<&Scene> {
        self.last_scene.as_ref()
    }

    /// Number of passes that reached the renderer.
    #[must_use]
    pub fn render_pass_count(&self) -> u64 {
        self.render_passes
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Stores `raw` for `dimension`, clamped into the legal range.
    pub fn set_value(&mut self, dimension: Dimension, raw: i64) -> u8 {
        let value = self.state.set_value(dimension, raw);
        trace!(dimension = dimension.key(), value, "survey value updated");
        value
    }

    /// Widget-relative geometry is dropped on resize; passes skip until the
    /// host reports a fresh layout.
    pub fn resize(&mut self, surface: Viewport) {
        trace!(
            width = surface.width,
            height = surface.height,
            "surface resized"
        );
        self.surface = surface;
        if matches!(self.mapper, ActiveMapper::Widget(Some(_))) {
            debug!("widget layout cleared by resize");
            self.mapper = ActiveMapper::Widget(None);
        }
    }

    /// Replaces the live widget geometry used by the widget-relative strategy.
    pub fn set_widget_layout(&mut self, layout: WidgetLayout) -> DiagramResult<()> {
        match self.mapper {
            ActiveMapper::Widget(_) => {
                self.mapper = ActiveMapper::Widget(Some(WidgetRelativeMapper::new(layout)?));
                Ok(())
            }
            ActiveMapper::Axis(_) => Err(DiagramError::InvalidConfig(
                "widget layout requires widget-relative mapping".to_owned(),
            )),
        }
    }

    /// Builds the scene for the current inputs without touching the renderer.
    #[must_use]
    pub fn build_scene(&self) -> Option<Scene> {
        let mapper: &dyn CoordinateMapper = match &self.mapper {
            ActiveMapper::Axis(mapper) => mapper,
            ActiveMapper::Widget(Some(mapper)) => mapper,
            ActiveMapper::Widget(None) => return None,
        };
        build_scene(
            &self.state,
            self.surface,
            mapper,
            self.config.balance_policy,
            &self.style,
        )
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
