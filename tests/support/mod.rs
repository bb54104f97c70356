#![allow(dead_code)]

use std::sync::Arc;

use chart_adapters::ChartTheme;
use chart_adapters::core::{Fields, Observation, OrdinalColorScale, UniversalChartState};

pub fn palette() -> Vec<String> {
    ChartTheme::default().palette
}

pub fn color_scale<S: AsRef<str>>(segments: &[S]) -> Arc<OrdinalColorScale> {
    Arc::new(OrdinalColorScale::new(
        segments.iter().map(|s| s.as_ref().to_owned()),
        &palette(),
    ))
}

/// One observation per `(segment, value)` row, read through `segment`/`value` keys.
pub fn categorical_state(chart_type: &str, rows: &[(&str, f64)]) -> UniversalChartState {
    let observations = rows
        .iter()
        .map(|(segment, value)| Observation::new().with("segment", *segment).with("value", *value))
        .collect();
    let segments: Vec<&str> = rows.iter().map(|(segment, _)| *segment).collect();
    UniversalChartState::new(
        chart_type,
        observations,
        Fields::new().with_segment_key("segment").with_y_key("value"),
        color_scale(&segments),
    )
    .with_segments(segments)
}

/// Unsegmented `(x, y)` rows; `None` is written as JSON null.
pub fn series_state(chart_type: &str, rows: &[(&str, Option<f64>)]) -> UniversalChartState {
    let observations = rows
        .iter()
        .map(|(x, y)| Observation::new().with("date", *x).with("value", *y))
        .collect();
    UniversalChartState::new(
        chart_type,
        observations,
        Fields::new().with_x_key("date").with_y_key("value"),
        color_scale::<&str>(&[]),
    )
}

/// `(x, segment, y)` rows with segments derived from the data.
pub fn segmented_series_state(
    chart_type: &str,
    rows: &[(&str, &str, Option<f64>)],
) -> UniversalChartState {
    let observations = rows
        .iter()
        .map(|(x, segment, y)| {
            Observation::new()
                .with("date", *x)
                .with("segment", *segment)
                .with("value", *y)
        })
        .collect();
    let mut segments: Vec<&str> = Vec::new();
    for (_, segment, _) in rows {
        if !segments.contains(segment) {
            segments.push(*segment);
        }
    }
    UniversalChartState::new(
        chart_type,
        observations,
        Fields::new()
            .with_x_key("date")
            .with_segment_key("segment")
            .with_y_key("value"),
        color_scale(&segments),
    )
}

/// `(segment, sub-level, value)` rows with a one-level hierarchy below the segment.
pub fn hierarchy_state(chart_type: &str, rows: &[(&str, &str, f64)]) -> UniversalChartState {
    let observations = rows
        .iter()
        .map(|(segment, child, value)| {
            Observation::new()
                .with("canton", *segment)
                .with("district", *child)
                .with("value", *value)
        })
        .collect();
    let mut segments: Vec<&str> = Vec::new();
    for (segment, _, _) in rows {
        if !segments.contains(segment) {
            segments.push(*segment);
        }
    }
    UniversalChartState::new(
        chart_type,
        observations,
        Fields::new()
            .with_segment_key("canton")
            .with_hierarchy_keys(["district"])
            .with_y_key("value"),
        color_scale(&segments),
    )
}
