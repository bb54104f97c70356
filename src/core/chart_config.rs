use serde::{Deserialize, Serialize};

/// Persisted chart configuration slice the engine reads.
///
/// Every field defaults so partially written configs still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    pub title: Option<String>,
    pub formatting: FormattingConfig,
    pub interactive_filters_config: InteractiveFiltersConfig,
}

impl ChartConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_formatting(mut self, formatting: FormattingConfig) -> Self {
        self.formatting = formatting;
        self
    }

    #[must_use]
    pub fn with_time_range(mut self, time_range: TimeRangeFilter) -> Self {
        self.interactive_filters_config.time_range = time_range;
        self
    }
}

/// Sparse, user-supplied display options.
///
/// `None` (absent or JSON `null`) means "not set"; the resolver applies the
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormattingConfig {
    pub show_x_axis: Option<bool>,
    pub show_y_axis: Option<bool>,
    pub show_x_axis_labels: Option<bool>,
    pub show_y_axis_labels: Option<bool>,
    pub show_gridlines: Option<bool>,
    pub show_legend: Option<bool>,
    pub show_title: Option<bool>,
    pub show_data_values: Option<bool>,
    pub show_tooltip: Option<bool>,
    pub enable_animation: Option<bool>,
    pub enable_zoom: Option<bool>,
    pub transparent_bg: Option<bool>,
    pub legend_position: Option<LegendPosition>,
    /// Animation duration override in milliseconds.
    pub animation_duration: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractiveFiltersConfig {
    pub time_range: TimeRangeFilter,
}

/// Interactive time-range brush state.
///
/// `from`/`to` are optional bounds on the x categories (usually ISO dates);
/// without them an active filter spans the whole axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeRangeFilter {
    pub active: bool,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl TimeRangeFilter {
    #[must_use]
    pub fn active() -> Self {
        Self {
            active: true,
            from: None,
            to: None,
        }
    }

    #[must_use]
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            active: true,
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }
}
