use cais_chart::api::{
    DiagramEngine, DiagramEngineConfig, MappingStrategy, RenderOutcome, SkipReason,
};
use cais_chart::core::{Dimension, SurveyState, Viewport, WidgetLayout, WidgetRect};
use cais_chart::interaction::{DiagramEvent, EventQueue};
use cais_chart::render::{NullRenderer, Scene};

fn engine() -> DiagramEngine<NullRenderer> {
    DiagramEngine::new(
        NullRenderer::default(),
        DiagramEngineConfig::new(Viewport::new(960, 560)),
    )
    .expect("engine init")
}

#[test]
fn every_event_triggers_one_full_pass() {
    let mut engine = engine();

    let outcome = engine.handle_event(DiagramEvent::ValueChanged {
        dimension: Dimension::Accountability,
        value: 9,
    });
    assert_eq!(outcome, RenderOutcome::Drawn);
    assert_eq!(engine.last_scene().expect("scene").gap_text, "+4");

    let outcome = engine.handle_event(DiagramEvent::Resized(Viewport::new(480, 280)));
    assert_eq!(outcome, RenderOutcome::Drawn);
    assert_eq!(engine.render_pass_count(), 2);
    assert_eq!(engine.last_scene().expect("scene").transform.scale, 0.5);
}

#[test]
fn out_of_range_event_value_is_clamped_not_rejected() {
    let mut engine = engine();
    let outcome = engine.handle_event(DiagramEvent::ValueChanged {
        dimension: Dimension::Control,
        value: 1_000,
    });
    assert_eq!(outcome, RenderOutcome::Drawn);
    assert_eq!(engine.value(Dimension::Control), 10);
}

#[test]
fn events_drain_in_arrival_order() {
    let mut engine = engine();
    let mut queue = EventQueue::new();
    queue.extend([
        DiagramEvent::ValueChanged {
            dimension: Dimension::Control,
            value: 5,
        },
        DiagramEvent::ValueChanged {
            dimension: Dimension::Accountability,
            value: 8,
        },
        DiagramEvent::Resized(Viewport::new(0, 560)),
        DiagramEvent::ValueChanged {
            dimension: Dimension::Influence,
            value: 7,
        },
        DiagramEvent::Resized(Viewport::new(960, 560)),
        DiagramEvent::ValueChanged {
            dimension: Dimension::Support,
            value: 4,
        },
    ]);

    let outcomes = engine.drain(&mut queue);
    assert!(queue.is_empty());
    assert_eq!(
        outcomes,
        vec![
            RenderOutcome::Drawn,
            RenderOutcome::Drawn,
            RenderOutcome::Skipped(SkipReason::DegenerateSurface),
            RenderOutcome::Skipped(SkipReason::DegenerateSurface),
            RenderOutcome::Drawn,
            RenderOutcome::Drawn,
        ]
    );
    assert_eq!(engine.state(), SurveyState::new(5, 8, 7, 4));
    assert_eq!(
        engine.last_scene().expect("scene").status_text,
        "This job is overloaded."
    );
    assert_eq!(engine.render_pass_count(), 4);
}

#[test]
fn rejected_layout_event_is_reported_not_raised() {
    let mut engine = engine();
    let outcome = engine.handle_event(DiagramEvent::LayoutChanged(WidgetLayout {
        host: WidgetRect::new(0.0, 0.0, 960.0, 560.0),
        tracks: [WidgetRect::default(); 4],
    }));
    assert!(matches!(outcome, RenderOutcome::Failed { .. }));
    assert_eq!(engine.render_pass_count(), 0);

    let outcome = engine.handle_event(DiagramEvent::Resized(Viewport::new(960, 560)));
    assert_eq!(outcome, RenderOutcome::Drawn);
}

fn host_layout(width: f64, height: f64) -> WidgetLayout {
    let track = |row: f64| WidgetRect::new(0.0, height * (0.1 + 0.2 * row), width, height * 0.1);
    WidgetLayout {
        host: WidgetRect::new(0.0, 0.0, width, height),
        tracks: [track(0.0), track(1.0), track(2.0), track(3.0)],
    }
}

fn max_stroke_x(scene: &Scene) -> f64 {
    scene
        .layers
        .iter()
        .flat_map(|layer| {
            let lines = layer.lines.iter().flat_map(|line| [line.x1, line.x2]);
            let polylines = layer
                .polylines
                .iter()
                .flat_map(|polyline| polyline.points.iter().map(|point| point.x));
            lines.chain(polylines).collect::<Vec<_>>()
        })
        .fold(f64::NEG_INFINITY, f64::max)
}

#[test]
fn resize_in_widget_mode_waits_for_a_fresh_layout() {
    let config = DiagramEngineConfig::new(Viewport::new(600, 300))
        .with_mapping(MappingStrategy::WidgetRelative);
    let mut engine = DiagramEngine::new(NullRenderer::default(), config).expect("engine init");

    let outcome = engine.handle_event(DiagramEvent::LayoutChanged(host_layout(600.0, 300.0)));
    assert_eq!(outcome, RenderOutcome::Drawn);
    assert_eq!(max_stroke_x(engine.last_scene().expect("scene")), 600.0);

    let outcome = engine.handle_event(DiagramEvent::Resized(Viewport::new(200, 100)));
    assert_eq!(
        outcome,
        RenderOutcome::Skipped(SkipReason::MissingWidgetLayout)
    );
    assert!(engine.last_scene().is_none());
    assert_eq!(engine.render_pass_count(), 1);

    let outcome = engine.handle_event(DiagramEvent::LayoutChanged(host_layout(200.0, 100.0)));
    assert_eq!(outcome, RenderOutcome::Drawn);
    let scene = engine.last_scene().expect("scene");
    assert_eq!(scene.frame_width, 200.0);
    assert!(max_stroke_x(scene) <= 200.0);
}
