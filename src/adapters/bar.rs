use std::sync::Arc;

use crate::api::{AdapterRegistry, ChartAdapter, ChartTheme};
use crate::core::UniversalChartState;
use crate::render::{ChartSpec, SeriesType};

use super::cartesian::{CategoryAxis, CategoryLayout, ZoomPolicy, category_spec};

pub const CHART_TYPE: &str = "bar";

/// Horizontal bars: categories run down the y axis.
#[derive(Debug, Clone)]
pub struct BarAdapter {
    theme: Arc<ChartTheme>,
}

impl BarAdapter {
    #[must_use]
    pub fn new(theme: Arc<ChartTheme>) -> Self {
        Self { theme }
    }
}

impl ChartAdapter for BarAdapter {
    fn adapt(&self, state: &UniversalChartState) -> ChartSpec {
        bar_spec(state, &self.theme)
    }
}

pub fn register(registry: &mut AdapterRegistry, theme: &Arc<ChartTheme>) {
    registry.register(CHART_TYPE, BarAdapter::new(Arc::clone(theme)));
}

#[must_use]
pub fn bar_spec(state: &UniversalChartState, theme: &ChartTheme) -> ChartSpec {
    category_spec(
        state,
        theme,
        CategoryLayout {
            kind: SeriesType::Bar,
            category_axis: CategoryAxis::Y,
            boundary_gap: true,
            stacked: false,
            area: false,
            connect_nulls: None,
            zoom: ZoomPolicy::Formatting,
        },
    )
}
