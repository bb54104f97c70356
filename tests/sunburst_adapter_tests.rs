use chart_adapters::ChartTheme;
use chart_adapters::adapters::sunburst::{ring_levels, sunburst_spec};
use chart_adapters::render::{LabelAlign, LabelPosition, LabelRotate, RotateMode, SeriesType};

mod support;

const ROWS: [(&str, &str, f64); 4] = [
    ("Bern", "Thun", 10.0),
    ("Zurich", "Uster", 50.0),
    ("Bern", "Biel", 30.0),
    ("Zurich", "Winterthur", 20.0),
];

#[test]
fn ring_table_has_four_levels() {
    let levels = ring_levels();
    assert_eq!(levels.len(), 4);
    assert!(levels[0].radius.is_none());
    assert!(levels[0].label.is_none());

    let radius = |index: usize| levels[index].radius.clone().expect("ring radius");
    assert_eq!(radius(1), ["15%".to_owned(), "35%".to_owned()]);
    assert_eq!(radius(2), ["35%".to_owned(), "55%".to_owned()]);
    assert_eq!(radius(3), ["55%".to_owned(), "75%".to_owned()]);

    let label = |index: usize| levels[index].label.clone().expect("ring label");
    assert_eq!(
        label(1).rotate,
        Some(LabelRotate::Mode(RotateMode::Tangential))
    );
    assert_eq!(label(2).align, Some(LabelAlign::Right));
    assert_eq!(label(3).position, Some(LabelPosition::Outside));
    assert_eq!(label(3).padding, Some(3.0));
}

#[test]
fn nested_rings_keep_data_order() {
    let spec = sunburst_spec(
        &support::hierarchy_state("sunburst", &ROWS),
        &ChartTheme::default(),
    );
    let series = spec.as_sunburst().expect("sunburst payload");
    assert_eq!(series.kind, SeriesType::Sunburst);
    assert!(series.sort.is_none());
    assert_eq!(series.radius, ["0%".to_owned(), "75%".to_owned()]);

    let roots: Vec<&str> = series.data.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(roots, vec!["Zurich", "Bern"]);
    let bern: Vec<&str> = series.data[1]
        .children
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(bern, vec!["Thun", "Biel"]);
}

#[test]
fn serialized_sort_is_null() {
    let spec = sunburst_spec(
        &support::hierarchy_state("sunburst", &ROWS),
        &ChartTheme::default(),
    );
    let json = spec.to_json_value().expect("serializable");
    let series = &json["series"][0];
    assert!(series.get("sort").is_some_and(serde_json::Value::is_null));
    assert_eq!(series["levels"][1]["label"]["rotate"], "tangential");
    assert!(series["levels"][0].as_object().is_some_and(|o| o.is_empty()));
}

#[test]
fn legend_lists_top_level_names() {
    let spec = sunburst_spec(
        &support::hierarchy_state("sunburst", &ROWS),
        &ChartTheme::default(),
    );
    assert_eq!(spec.base.legend.data, vec!["Zurich", "Bern"]);
    assert!(spec.base.legend.show);
}
