use crate::core::{FormattingConfig, LegendPosition, UniversalChartState};
use crate::render::{AxisSpec, LegendSpec, TooltipSpec};

/// Animation duration used when neither the theme nor the config sets one.
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 750;

/// Fully populated display flags derived from the sparse formatting config.
///
/// Recomputed on every adapter invocation; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFormatting {
    pub show_x_axis: bool,
    pub show_y_axis: bool,
    pub show_x_axis_labels: bool,
    pub show_y_axis_labels: bool,
    pub show_gridlines: bool,
    pub show_legend: bool,
    pub show_title: bool,
    pub show_data_values: bool,
    pub show_tooltip: bool,
    pub enable_animation: bool,
    pub enable_zoom: bool,
    pub transparent_bg: bool,
    pub legend_position: LegendPosition,
    pub animation_duration_override: Option<u32>,
}

impl Default for ResolvedFormatting {
    fn default() -> Self {
        resolve_formatting_config(&FormattingConfig::default())
    }
}

/// Which cartesian axis a set of flags applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    X,
    Y,
}

/// Resolves the state's formatting config. Total: never fails.
#[must_use]
pub fn resolve_formatting(state: &UniversalChartState) -> ResolvedFormatting {
    resolve_formatting_config(&state.chart_config.formatting)
}

/// Default-true flags are on unless explicitly `false`; default-false flags
/// are off unless explicitly `true`.
#[must_use]
pub fn resolve_formatting_config(config: &FormattingConfig) -> ResolvedFormatting {
    let unless_false = |flag: Option<bool>| flag != Some(false);
    let only_if_true = |flag: Option<bool>| flag == Some(true);

    ResolvedFormatting {
        show_x_axis: unless_false(config.show_x_axis),
        show_y_axis: unless_false(config.show_y_axis),
        show_x_axis_labels: unless_false(config.show_x_axis_labels),
        show_y_axis_labels: unless_false(config.show_y_axis_labels),
        show_gridlines: unless_false(config.show_gridlines),
        show_legend: unless_false(config.show_legend),
        show_title: unless_false(config.show_title),
        show_data_values: only_if_true(config.show_data_values),
        show_tooltip: unless_false(config.show_tooltip),
        enable_animation: unless_false(config.enable_animation),
        enable_zoom: only_if_true(config.enable_zoom),
        transparent_bg: only_if_true(config.transparent_bg),
        legend_position: config.legend_position.unwrap_or_default(),
        animation_duration_override: config.animation_duration,
    }
}

/// `0` when animation is off, else the config override or `default_ms`.
#[must_use]
pub fn animation_duration(formatting: &ResolvedFormatting, default_ms: u32) -> u32 {
    if !formatting.enable_animation {
        return 0;
    }
    formatting.animation_duration_override.unwrap_or(default_ms)
}

/// Hidden tooltip when tooltips are off, otherwise `base` switched on.
#[must_use]
pub fn tooltip_spec(formatting: &ResolvedFormatting, base: TooltipSpec) -> TooltipSpec {
    if !formatting.show_tooltip {
        return TooltipSpec::hidden();
    }
    TooltipSpec { show: true, ..base }
}

/// Legend is only shown when requested and there is more than one segment.
#[must_use]
pub fn legend_spec(formatting: &ResolvedFormatting, segments: &[String]) -> LegendSpec {
    let show = formatting.show_legend && segments.len() > 1;
    LegendSpec::new(show, formatting.legend_position, segments.to_vec())
}

/// Merges axis visibility, label and gridline flags onto `axis`.
///
/// Everything else on the axis (type, categories, boundary gap, name, label
/// rotation) is kept.
#[must_use]
pub fn apply_axis_formatting(
    mut axis: AxisSpec,
    formatting: &ResolvedFormatting,
    orientation: AxisOrientation,
) -> AxisSpec {
    let (show, show_labels) = match orientation {
        AxisOrientation::X => (formatting.show_x_axis, formatting.show_x_axis_labels),
        AxisOrientation::Y => (formatting.show_y_axis, formatting.show_y_axis_labels),
    };
    axis.show = show;
    axis.axis_label.show = show && show_labels;
    axis.split_line.show = formatting.show_gridlines && axis.split_line.show;
    axis
}
