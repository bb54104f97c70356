use std::sync::Arc;

use tracing::debug;

use crate::api::{AdapterRegistry, ChartAdapter, ChartTheme, resolve_formatting};
use crate::core::{HierarchyOrder, UniversalChartState, hierarchy_items, max_depth};
use crate::render::{
    BreadcrumbSpec, ChartPayload, ChartSpec, DataItem, ItemStyle, LabelSpec, NodeClick,
    SeriesType, TooltipSpec, TreemapLevel, TreemapPayload, TreemapSeries,
};

use super::item_names;

pub const CHART_TYPE: &str = "treemap";

/// Border and gap width of the outermost level; each deeper level halves it.
pub const TOP_LEVEL_BORDER_WIDTH: f64 = 4.0;
const LEVEL_BORDER_COLOR: &str = "#ffffff";

/// Nested rectangles sized by value, largest first on every level.
#[derive(Debug, Clone)]
pub struct TreemapAdapter {
    theme: Arc<ChartTheme>,
}

impl TreemapAdapter {
    #[must_use]
    pub fn new(theme: Arc<ChartTheme>) -> Self {
        Self { theme }
    }
}

impl ChartAdapter for TreemapAdapter {
    fn adapt(&self, state: &UniversalChartState) -> ChartSpec {
        treemap_spec(state, &self.theme)
    }
}

pub fn register(registry: &mut AdapterRegistry, theme: &Arc<ChartTheme>) {
    registry.register(CHART_TYPE, TreemapAdapter::new(Arc::clone(theme)));
}

/// Border/gap style of nesting level `level` (0 = outermost).
#[must_use]
pub fn level_style(level: usize) -> TreemapLevel {
    let exponent = i32::try_from(level).unwrap_or(i32::MAX);
    let width = TOP_LEVEL_BORDER_WIDTH * 0.5f64.powi(exponent);
    TreemapLevel {
        item_style: ItemStyle {
            color: None,
            border_color: Some(LEVEL_BORDER_COLOR.to_owned()),
            border_width: Some(width),
            gap_width: Some(width),
        },
    }
}

#[must_use]
pub fn treemap_spec(state: &UniversalChartState, theme: &ChartTheme) -> ChartSpec {
    let formatting = resolve_formatting(state);
    let items = hierarchy_items(state, HierarchyOrder::Descending);
    let depth = max_depth(&items);

    let formatter = if formatting.show_data_values {
        "{b}\n{c}"
    } else {
        "{b}"
    };
    let series = TreemapSeries {
        kind: SeriesType::Treemap,
        name: state.metadata.measure_label.clone().unwrap_or_default(),
        roam: formatting.enable_zoom,
        node_click: NodeClick::ZoomToNode,
        breadcrumb: BreadcrumbSpec {
            show: !items.is_empty(),
        },
        label: LabelSpec::shown(true).with_formatter(formatter),
        upper_label: LabelSpec::shown(depth > 1).with_formatter("{b}"),
        levels: (0..depth.max(1)).map(level_style).collect(),
        data: DataItem::from_items(&items, &state.metadata),
    };
    let legend_entries = item_names(&items);

    debug!(roots = items.len(), depth, "built treemap spec");

    ChartSpec::new(
        theme.base_spec(state, &formatting, TooltipSpec::item(), &legend_entries),
        ChartPayload::Treemap(TreemapPayload { series: [series] }),
    )
}
