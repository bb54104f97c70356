use std::sync::Arc;

use crate::api::{AdapterRegistry, ChartAdapter, ChartTheme};
use crate::core::UniversalChartState;
use crate::render::{ChartSpec, SeriesType};

use super::cartesian::{CategoryAxis, CategoryLayout, ZoomPolicy, category_spec};

pub const CHART_TYPE: &str = "column";

/// Vertical bars, grouped per segment.
#[derive(Debug, Clone)]
pub struct ColumnAdapter {
    theme: Arc<ChartTheme>,
}

impl ColumnAdapter {
    #[must_use]
    pub fn new(theme: Arc<ChartTheme>) -> Self {
        Self { theme }
    }
}

impl ChartAdapter for ColumnAdapter {
    fn adapt(&self, state: &UniversalChartState) -> ChartSpec {
        column_spec(state, &self.theme)
    }
}

pub fn register(registry: &mut AdapterRegistry, theme: &Arc<ChartTheme>) {
    registry.register(CHART_TYPE, ColumnAdapter::new(Arc::clone(theme)));
}

#[must_use]
pub fn column_spec(state: &UniversalChartState, theme: &ChartTheme) -> ChartSpec {
    category_spec(
        state,
        theme,
        CategoryLayout {
            kind: SeriesType::Bar,
            category_axis: CategoryAxis::X,
            boundary_gap: true,
            stacked: false,
            area: false,
            connect_nulls: None,
            zoom: ZoomPolicy::Formatting,
        },
    )
}
