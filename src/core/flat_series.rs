use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::core::fields::finite;
use crate::core::{FieldValue, UniversalChartState};

/// One observation seen through the `x`/`y`/`segment` accessors.
///
/// `y` stays `None` for missing or malformed values; adapters decide whether
/// that becomes a gap or is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatPoint {
    pub x: Option<FieldValue>,
    pub y: Option<f64>,
    pub segment: Option<String>,
}

/// Values of one series aligned to the category axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    /// `None` for the single-series case.
    pub segment: Option<String>,
    pub values: Vec<Option<f64>>,
}

/// Maps every observation through the accessors, preserving order.
///
/// Returns an empty list when `x` or `y` is unavailable. Null `y` values are
/// kept.
#[must_use]
pub fn flat_points(state: &UniversalChartState) -> Vec<FlatPoint> {
    let (Some(get_x), Some(get_y)) = (&state.fields.x, &state.fields.y) else {
        trace!(
            capabilities = ?state.fields.capabilities(),
            "flat shaping skipped: missing accessor"
        );
        return Vec::new();
    };
    let get_segment = state.fields.segment.as_ref();

    state
        .observations
        .iter()
        .map(|d| FlatPoint {
            x: get_x(d),
            y: finite(get_y(d)),
            segment: get_segment.and_then(|get| get(d)),
        })
        .collect()
}

/// Distinct x labels in first-seen order; points without `x` are ignored.
#[must_use]
pub fn categories(points: &[FlatPoint]) -> Vec<String> {
    let labels: IndexSet<String> = points
        .iter()
        .filter_map(|point| point.x.as_ref().map(FieldValue::label))
        .collect();
    labels.into_iter().collect()
}

/// Aligns point values to `categories`, one series per segment.
///
/// With no segments a single unnamed series is produced. When several points
/// share a category (and segment) the first one wins. Categories without a
/// value become `None` gaps.
#[must_use]
pub fn align_series(
    points: &[FlatPoint],
    categories: &[String],
    segments: &IndexSet<String>,
) -> Vec<AlignedSeries> {
    let mut cells: IndexMap<(Option<String>, String), Option<f64>> = IndexMap::new();
    for point in points {
        let Some(x) = &point.x else {
            continue;
        };
        let segment = if segments.is_empty() {
            None
        } else {
            match &point.segment {
                Some(segment) if segments.contains(segment) => Some(segment.clone()),
                _ => continue,
            }
        };
        cells.entry((segment, x.label())).or_insert(point.y);
    }

    let series_for = |segment: Option<String>| {
        let values = categories
            .iter()
            .map(|category| {
                cells
                    .get(&(segment.clone(), category.clone()))
                    .copied()
                    .flatten()
            })
            .collect();
        AlignedSeries { segment, values }
    };

    if segments.is_empty() {
        vec![series_for(None)]
    } else {
        segments
            .iter()
            .map(|segment| series_for(Some(segment.clone())))
            .collect()
    }
}

/// Numeric `(x, y)` pairs grouped by segment for scatter plots.
///
/// Points with a non-numeric `x` or missing `y` are dropped. Without segments
/// every point lands in a single group keyed by `None`.
#[must_use]
pub fn numeric_pairs(
    points: &[FlatPoint],
    segments: &IndexSet<String>,
) -> IndexMap<Option<String>, Vec<[f64; 2]>> {
    let mut groups: IndexMap<Option<String>, Vec<[f64; 2]>> = IndexMap::new();
    if segments.is_empty() {
        groups.insert(None, Vec::new());
    } else {
        for segment in segments {
            groups.insert(Some(segment.clone()), Vec::new());
        }
    }

    for point in points {
        let (Some(x), Some(y)) = (point.x.as_ref().and_then(FieldValue::as_f64), point.y) else {
            continue;
        };
        let key = if segments.is_empty() {
            None
        } else {
            match &point.segment {
                Some(segment) if segments.contains(segment) => Some(segment.clone()),
                _ => continue,
            }
        };
        if let Some(group) = groups.get_mut(&key) {
            group.push([x, y]);
        }
    }
    groups
}
