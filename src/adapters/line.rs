use std::sync::Arc;

use crate::api::{AdapterRegistry, ChartAdapter, ChartTheme};
use crate::core::UniversalChartState;
use crate::render::{ChartSpec, SeriesType};

use super::cartesian::{CategoryAxis, CategoryLayout, ZoomPolicy, category_spec};

pub const CHART_TYPE: &str = "line";

/// Line chart over a category axis.
///
/// The axis has no boundary gap so the line touches both plot edges. An
/// engaged time-range filter adds a slider and an inside zoom control; missing
/// values stay gaps.
#[derive(Debug, Clone)]
pub struct LineAdapter {
    theme: Arc<ChartTheme>,
}

impl LineAdapter {
    #[must_use]
    pub fn new(theme: Arc<ChartTheme>) -> Self {
        Self { theme }
    }
}

impl ChartAdapter for LineAdapter {
    fn adapt(&self, state: &UniversalChartState) -> ChartSpec {
        line_spec(state, &self.theme)
    }
}

pub fn register(registry: &mut AdapterRegistry, theme: &Arc<ChartTheme>) {
    registry.register(CHART_TYPE, LineAdapter::new(Arc::clone(theme)));
}

#[must_use]
pub fn line_spec(state: &UniversalChartState, theme: &ChartTheme) -> ChartSpec {
    category_spec(
        state,
        theme,
        CategoryLayout {
            kind: SeriesType::Line,
            category_axis: CategoryAxis::X,
            boundary_gap: false,
            stacked: false,
            area: false,
            connect_nulls: Some(false),
            zoom: ZoomPolicy::TimeRange,
        },
    )
}
