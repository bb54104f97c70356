use std::sync::Arc;

use tracing::debug;

use crate::api::{
    AdapterRegistry, AxisOrientation, ChartAdapter, ChartTheme, apply_axis_formatting,
    resolve_formatting,
};
use crate::core::{UniversalChartState, ZoomWindow, flat_points, numeric_pairs};
use crate::render::{
    AxisSpec, CartesianDatum, CartesianPayload, CartesianSeries, ChartPayload, ChartSpec,
    DataZoomKind, DataZoomSpec, GridSpec, LabelPosition, SeriesType, TooltipSpec,
};

use super::cartesian::{data_label, measure_name, series_segments};

pub const CHART_TYPE: &str = "scatter";

const SYMBOL_SIZE: f64 = 8.0;

/// Numeric x/y scatter plot. Points without a numeric `x` or `y` are dropped.
#[derive(Debug, Clone)]
pub struct ScatterAdapter {
    theme: Arc<ChartTheme>,
}

impl ScatterAdapter {
    #[must_use]
    pub fn new(theme: Arc<ChartTheme>) -> Self {
        Self { theme }
    }
}

impl ChartAdapter for ScatterAdapter {
    fn adapt(&self, state: &UniversalChartState) -> ChartSpec {
        scatter_spec(state, &self.theme)
    }
}

pub fn register(registry: &mut AdapterRegistry, theme: &Arc<ChartTheme>) {
    registry.register(CHART_TYPE, ScatterAdapter::new(Arc::clone(theme)));
}

#[must_use]
pub fn scatter_spec(state: &UniversalChartState, theme: &ChartTheme) -> ChartSpec {
    let formatting = resolve_formatting(state);
    let segments = series_segments(state);
    let groups = numeric_pairs(&flat_points(state), &segments);
    let fallback_color = theme.palette.first().cloned().unwrap_or_default();

    let series: Vec<CartesianSeries> = groups
        .into_iter()
        .map(|(segment, pairs)| {
            let (name, color) = match &segment {
                Some(segment) => (segment.clone(), state.colors.color(segment)),
                None => (measure_name(state), fallback_color.clone()),
            };
            let mut series = CartesianSeries::new(SeriesType::Scatter, name, color);
            series.data = pairs
                .iter()
                .map(|[x, y]| {
                    let tooltip_name = segment.clone().unwrap_or_else(|| x.to_string());
                    CartesianDatum::pair(*x, *y, &tooltip_name, &state.metadata)
                })
                .collect();
            series.label = data_label(&formatting, LabelPosition::Top);
            series.symbol_size = Some(SYMBOL_SIZE);
            series
        })
        .collect();

    let data_zoom = if formatting.enable_zoom {
        vec![
            DataZoomSpec::x(DataZoomKind::Inside, ZoomWindow::FULL),
            DataZoomSpec::y(DataZoomKind::Inside, ZoomWindow::FULL),
        ]
    } else {
        Vec::new()
    };
    let legend_entries: Vec<String> = segments.into_iter().collect();

    debug!(
        series = series.len(),
        points = series.iter().map(|s| s.data.len()).sum::<usize>(),
        "built scatter spec"
    );

    ChartSpec::new(
        theme.base_spec(state, &formatting, TooltipSpec::item(), &legend_entries),
        ChartPayload::Cartesian(CartesianPayload {
            grid: GridSpec::from_bounds(state.bounds),
            x_axis: apply_axis_formatting(AxisSpec::value(), &formatting, AxisOrientation::X),
            y_axis: apply_axis_formatting(
                AxisSpec::value().with_name(state.metadata.measure_label.clone()),
                &formatting,
                AxisOrientation::Y,
            ),
            data_zoom,
            series,
        }),
    )
}
