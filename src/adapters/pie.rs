use std::sync::Arc;

use tracing::debug;

use crate::api::{AdapterRegistry, ChartAdapter, ChartTheme, resolve_formatting};
use crate::core::{UniversalChartState, categorical_items};
use crate::render::{
    ChartPayload, ChartSpec, DataItem, LabelLineSpec, LabelPosition, LabelSpec, PiePayload,
    PieSeries, SeriesType, TooltipSpec,
};

use super::item_names;

pub const CHART_TYPE: &str = "pie";

/// Above this many slices labels move outside the pie.
pub const OUTSIDE_LABEL_SLICE_THRESHOLD: usize = 4;
/// Inner/outer radius when labels sit outside.
pub const OUTSIDE_LABEL_RADIUS: [&str; 2] = ["0%", "55%"];
/// Inner/outer radius when labels fit inside the slices.
pub const INSIDE_LABEL_RADIUS: [&str; 2] = ["0%", "70%"];

/// Pie chart over the categorical items (positive values, largest first).
#[derive(Debug, Clone)]
pub struct PieAdapter {
    theme: Arc<ChartTheme>,
}

impl PieAdapter {
    #[must_use]
    pub fn new(theme: Arc<ChartTheme>) -> Self {
        Self { theme }
    }
}

impl ChartAdapter for PieAdapter {
    fn adapt(&self, state: &UniversalChartState) -> ChartSpec {
        pie_spec(state, &self.theme)
    }
}

pub fn register(registry: &mut AdapterRegistry, theme: &Arc<ChartTheme>) {
    registry.register(CHART_TYPE, PieAdapter::new(Arc::clone(theme)));
}

/// Label placement and radius for `slice_count` slices.
///
/// More than [`OUTSIDE_LABEL_SLICE_THRESHOLD`] slices get outside labels on a
/// smaller pie; fewer keep labels inside a larger one.
#[must_use]
pub fn label_layout(slice_count: usize) -> (LabelPosition, [&'static str; 2]) {
    if slice_count > OUTSIDE_LABEL_SLICE_THRESHOLD {
        (LabelPosition::Outside, OUTSIDE_LABEL_RADIUS)
    } else {
        (LabelPosition::Inside, INSIDE_LABEL_RADIUS)
    }
}

#[must_use]
pub fn pie_spec(state: &UniversalChartState, theme: &ChartTheme) -> ChartSpec {
    let formatting = resolve_formatting(state);
    let items = categorical_items(state);
    let (position, radius) = label_layout(items.len());

    let formatter = if formatting.show_data_values {
        "{b}: {c}"
    } else {
        "{b}"
    };
    let series = PieSeries {
        kind: SeriesType::Pie,
        name: state.metadata.measure_label.clone().unwrap_or_default(),
        radius: radius.map(str::to_owned),
        center: ["50%".to_owned(), "50%".to_owned()],
        avoid_label_overlap: true,
        label: LabelSpec::shown(true).at(position).with_formatter(formatter),
        label_line: LabelLineSpec {
            show: position == LabelPosition::Outside,
        },
        data: DataItem::from_items(&items, &state.metadata),
    };
    let legend_entries = item_names(&items);

    debug!(
        slices = items.len(),
        label_position = ?position,
        "built pie spec"
    );

    ChartSpec::new(
        theme.base_spec(state, &formatting, TooltipSpec::item(), &legend_entries),
        ChartPayload::Pie(PiePayload { series: [series] }),
    )
}
