use std::sync::Arc;

use chart_adapters::core::{
    ChartConfig, Fields, Observation, OrdinalColorScale, TimeRangeFilter, UniversalChartState,
};
use chart_adapters::render::NullRenderer;
use chart_adapters::{ChartEngine, ChartEngineConfig, ChartTheme};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn palette() -> Vec<String> {
    ChartTheme::default().palette
}

fn categorical_state(chart_type: &str, count: usize) -> UniversalChartState {
    let segments: Vec<String> = (0..count).map(|i| format!("segment-{i}")).collect();
    let observations = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            Observation::new()
                .with("segment", segment.as_str())
                .with("district", format!("district-{}", i % 7))
                .with("value", ((i * 37) % 101) as f64)
        })
        .collect();
    UniversalChartState::new(
        chart_type,
        observations,
        Fields::new().with_segment_key("segment").with_y_key("value"),
        Arc::new(OrdinalColorScale::new(segments.iter().cloned(), &palette())),
    )
    .with_segments(segments)
}

fn line_state(points: usize, segments: usize) -> UniversalChartState {
    let names: Vec<String> = (0..segments).map(|i| format!("series-{i}")).collect();
    let observations = (0..points)
        .flat_map(|i| {
            let date = format!("{:04}-01-01", 1900 + i);
            names.iter().enumerate().map(move |(s, name)| {
                Observation::new()
                    .with("date", date.as_str())
                    .with("segment", name.as_str())
                    .with("value", (i * (s + 1)) as f64 * 0.5)
            })
        })
        .collect();
    UniversalChartState::new(
        "line",
        observations,
        Fields::new()
            .with_x_key("date")
            .with_segment_key("segment")
            .with_y_key("value"),
        Arc::new(OrdinalColorScale::new(names.iter().cloned(), &palette())),
    )
    .with_chart_config(
        ChartConfig::default().with_time_range(TimeRangeFilter::between("1950", "2000")),
    )
}

fn bench_pie_dispatch_1k(c: &mut Criterion) {
    let engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    let state = categorical_state("pie", 1_000);

    c.bench_function("pie_dispatch_1k", |b| {
        b.iter(|| {
            let _ = engine
                .build_spec(black_box(&state))
                .expect("pie spec should build");
        })
    });
}

fn bench_line_dispatch_windowed(c: &mut Criterion) {
    let engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    let state = line_state(120, 8);

    c.bench_function("line_dispatch_120x8_windowed", |b| {
        b.iter(|| {
            let _ = engine
                .build_spec(black_box(&state))
                .expect("line spec should build");
        })
    });
}

fn bench_treemap_json_contract(c: &mut Criterion) {
    let engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    let mut state = categorical_state("treemap", 500);
    state.fields = state.fields.with_hierarchy_keys(["district"]);

    c.bench_function("treemap_json_contract_500", |b| {
        b.iter(|| {
            let spec = engine
                .build_spec(black_box(&state))
                .expect("treemap spec should build");
            let _ = spec
                .to_json_contract_v1_pretty("treemap")
                .expect("contract serialization should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_pie_dispatch_1k,
    bench_line_dispatch_windowed,
    bench_treemap_json_contract
);
criterion_main!(benches);
