use chart_adapters::core::UniversalChartState;
use chart_adapters::render::NullRenderer;
use chart_adapters::{
    ChartEngine, ChartEngineConfig, ChartError, ChartSpec, ChartTheme,
    adapters::pie::pie_spec,
};

mod support;

#[test]
fn engine_renders_builtin_chart_types() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");

    engine
        .render(&support::categorical_state("pie", &[("A", 1.0), ("B", 2.0)]))
        .expect("render pie");
    engine
        .render(&support::segmented_series_state(
            "line",
            &[("2020", "A", Some(1.0)), ("2020", "B", Some(2.0))],
        ))
        .expect("render line");

    let renderer = engine.renderer();
    assert_eq!(renderer.render_count, 2);
    assert_eq!(renderer.last_series_count, 2);
    assert!(renderer.last_spec.as_ref().and_then(ChartSpec::as_cartesian).is_some());
}

#[test]
fn unknown_chart_type_reaches_the_caller() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    let err = engine
        .render(&support::categorical_state("radar", &[("A", 1.0)]))
        .expect_err("unregistered");
    assert!(matches!(err, ChartError::UnregisteredChartType { .. }));
    assert_eq!(engine.into_renderer().render_count, 0);
}

#[test]
fn engine_without_builtins_needs_explicit_adapters() {
    let config = ChartEngineConfig::default().without_builtin_adapters();
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    assert!(engine.registry().is_empty());

    let theme = engine.theme().clone();
    engine.register_adapter("donut", move |state: &UniversalChartState| {
        pie_spec(state, &theme)
    });
    let spec = engine
        .build_spec(&support::categorical_state("donut", &[("A", 1.0)]))
        .expect("spec");
    assert!(spec.as_pie().is_some());
}

#[test]
fn invalid_theme_is_rejected() {
    let theme = ChartTheme {
        palette: Vec::new(),
        ..ChartTheme::default()
    };
    let result = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::default().with_theme(theme),
    );
    assert!(matches!(result, Err(ChartError::InvalidData(_))));

    let theme = ChartTheme {
        font_size: f64::NAN,
        ..ChartTheme::default()
    };
    assert!(ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::default().with_theme(theme)
    )
    .is_err());
}

#[test]
fn engine_config_loads_from_partial_json() {
    let config = ChartEngineConfig::from_json_str(
        r##"{ "theme": { "palette": ["#111111", "#222222"], "animationEasing": "linear" } }"##,
    )
    .expect("config");
    assert!(config.register_builtin_adapters);
    assert_eq!(config.theme.palette, vec!["#111111", "#222222"]);
    assert_eq!(config.theme.animation_easing, "linear");
    assert_eq!(config.theme.font_size, ChartTheme::default().font_size);

    let engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    let spec = engine
        .build_spec(&support::series_state("column", &[("A", Some(1.0))]))
        .expect("spec");
    assert_eq!(spec.base.color, vec!["#111111", "#222222"]);
    assert_eq!(spec.base.animation_easing, "linear");

    assert!(ChartEngineConfig::from_json_str("{ not json").is_err());
}

#[test]
fn json_contract_round_trips_a_pie_spec() {
    let engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    let spec = engine
        .build_spec(&support::categorical_state(
            "pie",
            &[("A", 1.0), ("B", 2.0), ("C", 3.0), ("D", 4.0), ("E", 5.0)],
        ))
        .expect("spec");

    let json = spec.to_json_contract_v1_pretty("pie").expect("serialize");
    let parsed = ChartSpec::from_json_contract_str(&json).expect("parse");
    assert_eq!(parsed.schema_version, 1);
    assert_eq!(parsed.chart_type, "pie");
    assert_eq!(parsed.spec, spec);
}

#[test]
fn json_contract_round_trips_a_treemap_spec() {
    let engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    let spec = engine
        .build_spec(&support::hierarchy_state(
            "treemap",
            &[("Bern", "Thun", 1.0), ("Bern", "Biel", 2.0)],
        ))
        .expect("spec");
    let json = spec.to_json_contract_v1_pretty("treemap").expect("serialize");
    let parsed = ChartSpec::from_json_contract_str(&json).expect("parse");
    assert_eq!(parsed.spec, spec);
}

#[test]
fn json_contract_rejects_unknown_versions() {
    let engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    let spec = engine
        .build_spec(&support::categorical_state("pie", &[("A", 1.0)]))
        .expect("spec");
    let json = spec
        .to_json_contract_v1_pretty("pie")
        .expect("serialize")
        .replacen("\"schemaVersion\": 1", "\"schemaVersion\": 2", 1);
    assert!(matches!(
        ChartSpec::from_json_contract_str(&json),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn renderer_rejects_non_finite_values() {
    let engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    let mut spec = engine
        .build_spec(&support::series_state("line", &[("2020", Some(1.0))]))
        .expect("spec");
    if let chart_adapters::render::ChartPayload::Cartesian(payload) = &mut spec.payload {
        payload.series[0].data[0].value = chart_adapters::render::DatumValue::Single(Some(f64::NAN));
    }
    assert!(spec.validate().is_err());

    let mut renderer = NullRenderer::default();
    assert!(chart_adapters::render::Renderer::render(&mut renderer, &spec).is_err());
    assert_eq!(renderer.render_count, 0);
}
