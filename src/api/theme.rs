use serde::{Deserialize, Serialize};

use crate::core::UniversalChartState;
use crate::error::{ChartError, ChartResult};
use crate::render::{BaseSpec, TextStyle, TitleSpec, TooltipSpec};

use super::formatting::{
    DEFAULT_ANIMATION_DURATION_MS, ResolvedFormatting, animation_duration, legend_spec,
    tooltip_spec,
};

/// Shared look of every adapter's output: palette, font and animation timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartTheme {
    pub palette: Vec<String>,
    pub font_family: String,
    pub font_size: f64,
    pub text_color: String,
    pub background_color: String,
    pub animation_duration_ms: u32,
    pub animation_easing: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            palette: [
                "#1890ff", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
                "#7f7f7f", "#bcbd22", "#17becf",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            font_family: "Roboto, \"Helvetica Neue\", Arial, sans-serif".to_owned(),
            font_size: 12.0,
            text_color: "#333333".to_owned(),
            background_color: "#ffffff".to_owned(),
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            animation_easing: "cubicOut".to_owned(),
        }
    }
}

impl ChartTheme {
    pub fn validate(&self) -> ChartResult<()> {
        if self.palette.is_empty() {
            return Err(ChartError::InvalidData(
                "theme palette must not be empty".to_owned(),
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "theme font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            color: self.text_color.clone(),
        }
    }

    /// Builds the chart-type-independent part of a spec.
    ///
    /// `tooltip` is the adapter's preferred tooltip; formatting may hide it.
    /// `legend_entries` are the names the legend would list.
    #[must_use]
    pub fn base_spec(
        &self,
        state: &UniversalChartState,
        formatting: &ResolvedFormatting,
        tooltip: TooltipSpec,
        legend_entries: &[String],
    ) -> BaseSpec {
        let title = state.chart_config.title.clone().unwrap_or_default();
        BaseSpec {
            color: self.palette.clone(),
            background_color: if formatting.transparent_bg {
                "transparent".to_owned()
            } else {
                self.background_color.clone()
            },
            text_style: self.text_style(),
            animation: formatting.enable_animation,
            animation_duration: animation_duration(formatting, self.animation_duration_ms),
            animation_easing: self.animation_easing.clone(),
            title: TitleSpec::new(formatting.show_title && !title.is_empty(), title),
            tooltip: tooltip_spec(formatting, tooltip),
            legend: legend_spec(formatting, legend_entries),
        }
    }
}
