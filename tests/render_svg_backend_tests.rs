use cais_chart::api::{DiagramEngine, DiagramEngineConfig, GAP_INDICATOR_LABEL};
use cais_chart::core::{SurveyState, Viewport};
use cais_chart::render::{SvgRenderer, scene_to_svg};

fn render_document(surface: Viewport, state: SurveyState) -> String {
    let config = DiagramEngineConfig::new(surface).with_initial_state(state);
    let mut engine = DiagramEngine::new(SvgRenderer::default(), config).expect("engine init");
    engine.render().expect("render");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.backend_name(), "svg");
    assert_eq!(renderer.documents_written(), 1);
    renderer.last_document().expect("document").to_owned()
}

#[test]
fn svg_document_is_sized_to_surface() {
    let svg = render_document(Viewport::new(1920, 560), SurveyState::default());
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains(r#"width="1920" height="560" viewBox="0 0 1920 560""#));
    assert!(svg.contains(r#"<g transform="translate(480 0) scale(1)""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn svg_layers_are_emitted_back_to_front() {
    let svg = render_document(Viewport::new(960, 560), SurveyState::new(5, 8, 7, 4));
    let position = |layer: &str| {
        svg.find(&format!(r#"data-layer="{layer}""#))
            .unwrap_or_else(|| panic!("missing layer {layer}"))
    };
    assert!(position("grid") < position("rows"));
    assert!(position("rows") < position("trace"));
    assert!(position("trace") < position("gap"));
    assert!(position("gap") < position("status"));
}

#[test]
fn svg_contains_indicator_and_status_text() {
    let svg = render_document(Viewport::new(960, 560), SurveyState::new(5, 8, 7, 4));
    assert!(svg.contains(">+3</text>"));
    assert!(svg.contains(&format!(">{GAP_INDICATOR_LABEL}</text>")));
    assert!(svg.contains(">This job is overloaded.</text>"));
    assert!(svg.contains(">Span of Control</text>"));
    assert!(svg.contains("stroke-dasharray=\"2 5\""));
    assert_eq!(svg.matches("<circle ").count(), 4);
    assert_eq!(svg.matches("<polyline ").count(), 1);
}

#[test]
fn skipped_pass_writes_no_document() {
    let config = DiagramEngineConfig::new(Viewport::new(0, 0));
    let mut engine = DiagramEngine::new(SvgRenderer::default(), config).expect("engine init");
    engine.render().expect("render");
    assert!(engine.renderer().last_document().is_none());
    assert_eq!(engine.renderer().documents_written(), 0);
}

#[test]
fn custom_font_family_is_escaped() {
    let config = DiagramEngineConfig::new(Viewport::new(960, 560));
    let renderer = SvgRenderer::default().with_font_family("\"Inter\", sans-serif");
    let mut engine = DiagramEngine::new(renderer, config).expect("engine init");
    engine.render().expect("render");
    let svg = engine.renderer().last_document().expect("document");
    assert!(svg.contains(r#"font-family="&quot;Inter&quot;, sans-serif""#));

    let scene = engine.last_scene().expect("scene");
    let direct = scene_to_svg(scene, "\"Inter\", sans-serif").expect("svg");
    assert_eq!(direct, svg);
}
