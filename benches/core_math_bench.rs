use cais_chart::api::{DiagramEngine, DiagramEngineConfig, RenderStyle, build_scene};
use cais_chart::core::{
    AxisProjectionMapper, BalancePolicy, CoordinateMapper, DerivedIndicators, Dimension,
    LogicalFrame, SurveyState, Viewport,
};
use cais_chart::render::{NullRenderer, scene_to_svg};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_value_projection(c: &mut Criterion) {
    let mapper = AxisProjectionMapper::new(LogicalFrame::default()).expect("valid frame");

    c.bench_function("value_projection_all_cells", |b| {
        b.iter(|| {
            for dimension in Dimension::ALL {
                for value in 1..=10u8 {
                    black_box(mapper.point_for(black_box(dimension), black_box(value)));
                }
            }
        })
    });
}

fn bench_geometric_indicators(c: &mut Criterion) {
    let mapper = AxisProjectionMapper::new(LogicalFrame::default()).expect("valid frame");
    let state = SurveyState::new(5, 8, 7, 4);

    c.bench_function("geometric_indicators", |b| {
        b.iter(|| {
            black_box(DerivedIndicators::compute(
                black_box(&state),
                &mapper,
                BalancePolicy::Geometric,
            ))
        })
    });
}

fn bench_build_scene(c: &mut Criterion) {
    let mapper = AxisProjectionMapper::new(LogicalFrame::default()).expect("valid frame");
    let state = SurveyState::new(3, 9, 6, 2);
    let style = RenderStyle::default();

    c.bench_function("build_scene_1080p", |b| {
        b.iter(|| {
            black_box(build_scene(
                black_box(&state),
                Viewport::new(1920, 1080),
                &mapper,
                BalancePolicy::Threshold,
                &style,
            ))
        })
    });
}

fn bench_full_pass_with_svg(c: &mut Criterion) {
    let config = DiagramEngineConfig::new(Viewport::new(1920, 1080));
    let mut engine = DiagramEngine::new(NullRenderer::default(), config).expect("engine init");

    c.bench_function("engine_pass_and_svg_export", |b| {
        b.iter(|| {
            engine.render().expect("render");
            let scene = engine.last_scene().expect("scene");
            black_box(scene_to_svg(scene, "sans-serif").expect("svg"))
        })
    });
}

criterion_group!(
    benches,
    bench_value_projection,
    bench_geometric_indicators,
    bench_build_scene,
    bench_full_pass_with_svg
);
criterion_main!(benches);
