use std::sync::Arc;

use crate::api::{AdapterRegistry, ChartAdapter, ChartTheme};
use crate::core::UniversalChartState;
use crate::render::{ChartSpec, SeriesType};

use super::cartesian::{CategoryAxis, CategoryLayout, ZoomPolicy, category_spec};

pub const CHART_TYPE: &str = "area";

/// Filled line chart; segments are stacked on top of each other.
#[derive(Debug, Clone)]
pub struct AreaAdapter {
    theme: Arc<ChartTheme>,
}

impl AreaAdapter {
    #[must_use]
    pub fn new(theme: Arc<ChartTheme>) -> Self {
        Self { theme }
    }
}

impl ChartAdapter for AreaAdapter {
    fn adapt(&self, state: &UniversalChartState) -> ChartSpec {
        area_spec(state, &self.theme)
    }
}

pub fn register(registry: &mut AdapterRegistry, theme: &Arc<ChartTheme>) {
    registry.register(CHART_TYPE, AreaAdapter::new(Arc::clone(theme)));
}

#[must_use]
pub fn area_spec(state: &UniversalChartState, theme: &ChartTheme) -> ChartSpec {
    category_spec(
        state,
        theme,
        CategoryLayout {
            kind: SeriesType::Line,
            category_axis: CategoryAxis::X,
            boundary_gap: false,
            stacked: true,
            area: true,
            connect_nulls: Some(false),
            zoom: ZoomPolicy::TimeRange,
        },
    )
}
