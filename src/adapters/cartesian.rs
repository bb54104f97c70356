use indexmap::IndexSet;
use tracing::debug;

use crate::api::{
    AxisOrientation, ChartTheme, ResolvedFormatting, apply_axis_formatting, resolve_formatting,
};
use crate::core::{
    UniversalChartState, ZoomWindow, align_series, categories, flat_points, zoom_window,
};
use crate::render::{
    AreaStyle, AxisSpec, CartesianDatum, CartesianPayload, CartesianSeries, ChartPayload,
    ChartSpec, DataZoomKind, DataZoomSpec, GridSpec, LabelPosition, LabelSpec, SeriesType,
    TooltipSpec,
};

/// Which axis carries the categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CategoryAxis {
    X,
    Y,
}

/// What adds zoom controls to a category chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ZoomPolicy {
    /// An engaged time-range filter adds a slider plus an inside control.
    TimeRange,
    /// `enableZoom` adds a single inside control.
    Formatting,
}

/// Layout knobs of the category-axis family (line, area, column, bar).
#[derive(Debug, Clone, Copy)]
pub(crate) struct CategoryLayout {
    pub kind: SeriesType,
    pub category_axis: CategoryAxis,
    pub boundary_gap: bool,
    pub stacked: bool,
    pub area: bool,
    pub connect_nulls: Option<bool>,
    pub zoom: ZoomPolicy,
}

pub(crate) const STACK_ID: &str = "total";
const AREA_OPACITY: f64 = 0.35;

/// Segments a cartesian chart splits on; empty when there is no segment field.
pub(crate) fn series_segments(state: &UniversalChartState) -> IndexSet<String> {
    if state.fields.segment.is_some() {
        state.effective_segments()
    } else {
        IndexSet::new()
    }
}

/// Name of the single series of an unsegmented chart.
pub(crate) fn measure_name(state: &UniversalChartState) -> String {
    state.metadata.measure_label.clone().unwrap_or_default()
}

pub(crate) fn data_label(formatting: &ResolvedFormatting, position: LabelPosition) -> LabelSpec {
    LabelSpec::shown(formatting.show_data_values).at(position)
}

fn zoom_controls(
    state: &UniversalChartState,
    formatting: &ResolvedFormatting,
    policy: ZoomPolicy,
    categories: &[String],
    category_axis: CategoryAxis,
) -> Vec<DataZoomSpec> {
    let on_axis = |kind: DataZoomKind, window: ZoomWindow| match category_axis {
        CategoryAxis::X => DataZoomSpec::x(kind, window),
        CategoryAxis::Y => DataZoomSpec::y(kind, window),
    };
    match policy {
        ZoomPolicy::TimeRange => {
            let time_range = &state.chart_config.interactive_filters_config.time_range;
            if !time_range.active {
                return Vec::new();
            }
            let window = zoom_window(
                categories,
                time_range.from.as_deref(),
                time_range.to.as_deref(),
            );
            vec![
                on_axis(DataZoomKind::Slider, window),
                on_axis(DataZoomKind::Inside, window),
            ]
        }
        ZoomPolicy::Formatting if formatting.enable_zoom => {
            vec![on_axis(DataZoomKind::Inside, ZoomWindow::FULL)]
        }
        ZoomPolicy::Formatting => Vec::new(),
    }
}

/// Builds a category-axis chart: one series per segment, or a single series
/// when the state has no segment field.
///
/// Values are aligned to categories in observation order; missing values are
/// kept as `null` gaps.
pub(crate) fn category_spec(
    state: &UniversalChartState,
    theme: &ChartTheme,
    layout: CategoryLayout,
) -> ChartSpec {
    let formatting = resolve_formatting(state);
    let segments = series_segments(state);
    let points = flat_points(state);
    let categories = categories(&points);
    let aligned = align_series(&points, &categories, &segments);

    let label_position = match layout.category_axis {
        CategoryAxis::X => LabelPosition::Top,
        CategoryAxis::Y => LabelPosition::Right,
    };
    let fallback_color = theme.palette.first().cloned().unwrap_or_default();
    let stack = (layout.stacked && segments.len() > 1).then(|| STACK_ID.to_owned());

    let series: Vec<CartesianSeries> = aligned
        .into_iter()
        .map(|aligned| {
            let (name, color) = match &aligned.segment {
                Some(segment) => (segment.clone(), state.colors.color(segment)),
                None => (measure_name(state), fallback_color.clone()),
            };
            let mut series = CartesianSeries::new(layout.kind, name, color);
            series.data = aligned
                .values
                .iter()
                .zip(&categories)
                .map(|(value, category)| {
                    let tooltip_name = aligned.segment.as_deref().unwrap_or(category);
                    CartesianDatum::single(*value, tooltip_name, &state.metadata)
                })
                .collect();
            series.label = data_label(&formatting, label_position);
            series.stack = stack.clone();
            series.area_style = layout.area.then_some(AreaStyle {
                opacity: AREA_OPACITY,
            });
            series.connect_nulls = layout.connect_nulls;
            series
        })
        .collect();

    let category_axis = AxisSpec::category(categories.clone()).with_boundary_gap(layout.boundary_gap);
    let value_axis = AxisSpec::value().with_name(state.metadata.measure_label.clone());
    let (x_axis, y_axis) = match layout.category_axis {
        CategoryAxis::X => (category_axis, value_axis),
        CategoryAxis::Y => (value_axis, category_axis),
    };

    let data_zoom = zoom_controls(
        state,
        &formatting,
        layout.zoom,
        &categories,
        layout.category_axis,
    );
    let legend_entries: Vec<String> = segments.into_iter().collect();

    debug!(
        chart_type = %state.chart_type,
        categories = categories.len(),
        series = series.len(),
        zoom_controls = data_zoom.len(),
        "built category chart spec"
    );

    ChartSpec::new(
        theme.base_spec(state, &formatting, TooltipSpec::axis(), &legend_entries),
        ChartPayload::Cartesian(CartesianPayload {
            grid: GridSpec::from_bounds(state.bounds),
            x_axis: apply_axis_formatting(x_axis, &formatting, AxisOrientation::X),
            y_axis: apply_axis_formatting(y_axis, &formatting, AxisOrientation::Y),
            data_zoom,
            series,
        }),
    )
}
