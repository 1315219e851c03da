#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use cais_chart::DiagramError;
use cais_chart::api::{DiagramEngine, DiagramEngineConfig};
use cais_chart::core::{BalancePolicy, SurveyState, Viewport};
use cais_chart::render::{CairoContextRenderer, CairoRenderer};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, DiagramError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_layer() {
    let renderer = CairoRenderer::new(960, 560).expect("renderer");
    let config = DiagramEngineConfig::new(Viewport::new(960, 560))
        .with_initial_state(SurveyState::new(5, 8, 7, 4));
    let mut engine = DiagramEngine::new(renderer, config).expect("engine init");

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    let stats = renderer.last_stats();

    // 10 grid lines, 4 row separators, 1 gap shaft.
    assert_eq!(stats.lines_drawn, 15);
    assert_eq!(stats.polylines_drawn, 1);
    assert_eq!(stats.circles_drawn, 4);
    assert_eq!(stats.paths_drawn, 2);
    assert_eq!(stats.rects_drawn, 1);
    // 10 tick labels, 16 row texts, 2 gap texts, 1 status text.
    assert_eq!(stats.texts_drawn, 29);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(600, 320).expect("renderer");
    let config = DiagramEngineConfig::new(Viewport::new(600, 320))
        .with_balance_policy(BalancePolicy::Geometric);
    let mut engine = DiagramEngine::new(renderer, config).expect("engine init");
    engine.render().expect("render");
    let scene = engine.last_scene().cloned().expect("scene");

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    let mut renderer = engine.into_renderer();
    renderer
        .render_on_cairo_context(&context, &scene)
        .expect("render on external context");

    // Balance segments join the trace under the geometric policy.
    assert_eq!(renderer.last_stats().lines_drawn, 17);
}
