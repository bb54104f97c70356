use tracing::trace;

use crate::core::fields::value_or_zero;
use crate::core::item::sort_descending;
use crate::core::{ChartItem, UniversalChartState};

/// Maps observations to pie-style items.
///
/// Each observation becomes `{ name: label ?? segment, value: y ?? 0, color }`.
/// Items with `value <= 0` are dropped (so missing and zero values are
/// indistinguishable) and the result is sorted by value, largest first.
/// Label placement downstream relies on that order.
///
/// Observations whose segment is missing or outside the effective segment set
/// are skipped, so the color scale is only queried for known segments.
#[must_use]
pub fn categorical_items(state: &UniversalChartState) -> Vec<ChartItem> {
    let (Some(get_segment), Some(get_y)) = (&state.fields.segment, &state.fields.y) else {
        trace!(
            capabilities = ?state.fields.capabilities(),
            "categorical shaping skipped: missing accessor"
        );
        return Vec::new();
    };

    let segments = state.effective_segments();
    let mut items: Vec<ChartItem> = state
        .observations
        .iter()
        .filter_map(|d| {
            let segment = get_segment(d)?;
            if !segments.contains(&segment) {
                return None;
            }
            let value = value_or_zero(get_y(d));
            if value <= 0.0 {
                return None;
            }
            let name = state
                .fields
                .label
                .as_ref()
                .and_then(|get_label| get_label(d))
                .unwrap_or_else(|| segment.clone());
            Some(ChartItem::leaf(name, value, state.colors.color(&segment)))
        })
        .collect();
    sort_descending(&mut items);

    trace!(
        observations = state.observations.len(),
        items = items.len(),
        "categorical shaping"
    );
    items
}
