use std::sync::Arc;

use tracing::debug;

use crate::api::{AdapterRegistry, ChartAdapter, ChartTheme, resolve_formatting};
use crate::core::{HierarchyOrder, UniversalChartState, hierarchy_items};
use crate::render::{
    ChartPayload, ChartSpec, DataItem, LabelAlign, LabelPosition, LabelRotate, LabelSpec,
    RotateMode, SeriesType, SunburstLevel, SunburstPayload, SunburstSeries, TooltipSpec,
};

use super::item_names;

pub const CHART_TYPE: &str = "sunburst";

/// Ring boundaries from the center disc outwards.
pub const RING_BOUNDS: [&str; 4] = ["15%", "35%", "55%", "75%"];
const OUTER_LABEL_PADDING: f64 = 3.0;

/// Radial hierarchy; nested rings keep the data order.
#[derive(Debug, Clone)]
pub struct SunburstAdapter {
    theme: Arc<ChartTheme>,
}

impl SunburstAdapter {
    #[must_use]
    pub fn new(theme: Arc<ChartTheme>) -> Self {
        Self { theme }
    }
}

impl ChartAdapter for SunburstAdapter {
    fn adapt(&self, state: &UniversalChartState) -> ChartSpec {
        sunburst_spec(state, &self.theme)
    }
}

pub fn register(registry: &mut AdapterRegistry, theme: &Arc<ChartTheme>) {
    registry.register(CHART_TYPE, SunburstAdapter::new(Arc::clone(theme)));
}

fn ring(inner: &str, outer: &str, label: LabelSpec) -> SunburstLevel {
    SunburstLevel {
        radius: Some([inner.to_owned(), outer.to_owned()]),
        label: Some(label),
    }
}

/// Fixed ring table: the implicit center, then tangential, right-aligned and
/// outside labels.
#[must_use]
pub fn ring_levels() -> Vec<SunburstLevel> {
    let [center, first, second, outer] = RING_BOUNDS;
    vec![
        SunburstLevel {
            radius: None,
            label: None,
        },
        ring(
            center,
            first,
            LabelSpec::shown(true).with_rotate(LabelRotate::Mode(RotateMode::Tangential)),
        ),
        ring(
            first,
            second,
            LabelSpec::shown(true).with_align(LabelAlign::Right),
        ),
        ring(
            second,
            outer,
            LabelSpec::shown(true)
                .at(LabelPosition::Outside)
                .with_padding(OUTER_LABEL_PADDING),
        ),
    ]
}

#[must_use]
pub fn sunburst_spec(state: &UniversalChartState, theme: &ChartTheme) -> ChartSpec {
    let formatting = resolve_formatting(state);
    let items = hierarchy_items(state, HierarchyOrder::Natural);

    let series = SunburstSeries {
        kind: SeriesType::Sunburst,
        name: state.metadata.measure_label.clone().unwrap_or_default(),
        radius: ["0%".to_owned(), RING_BOUNDS[3].to_owned()],
        sort: None,
        levels: ring_levels(),
        data: DataItem::from_items(&items, &state.metadata),
    };
    let legend_entries = item_names(&items);

    debug!(roots = items.len(), "built sunburst spec");

    ChartSpec::new(
        theme.base_spec(state, &formatting, TooltipSpec::item(), &legend_entries),
        ChartPayload::Sunburst(SunburstPayload { series: [series] }),
    )
}
