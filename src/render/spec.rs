use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::components::{
    AxisSpec, DataZoomSpec, GridSpec, LegendSpec, TextStyle, TitleSpec, TooltipSpec,
};
use super::series::{CartesianSeries, PieSeries, SunburstSeries, TreemapSeries};

/// Part of every spec regardless of chart type: theme, title, tooltip, legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseSpec {
    /// Theme palette, used by the renderer for anything not colored explicitly.
    pub color: Vec<String>,
    pub background_color: String,
    pub text_style: TextStyle,
    pub animation: bool,
    pub animation_duration: u32,
    pub animation_easing: String,
    pub title: TitleSpec,
    pub tooltip: TooltipSpec,
    pub legend: LegendSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartesianPayload {
    pub grid: GridSpec,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub data_zoom: Vec<DataZoomSpec>,
    pub series: Vec<CartesianSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiePayload {
    pub series: [PieSeries; 1],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapPayload {
    pub series: [TreemapSeries; 1],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunburstPayload {
    pub series: [SunburstSeries; 1],
}

/// Chart-type-specific part of a spec.
///
/// Serialized untagged so the flattened spec reads like a plain chart option
/// object; the series `type` fields tell the variants apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartPayload {
    Cartesian(CartesianPayload),
    Pie(PiePayload),
    Treemap(TreemapPayload),
    Sunburst(SunburstPayload),
}

/// Declarative, renderer-ready chart configuration.
///
/// Produced fresh by an adapter on every state change and never patched in
/// place by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(flatten)]
    pub base: BaseSpec,
    #[serde(flatten)]
    pub payload: ChartPayload,
}

impl ChartSpec {
    #[must_use]
    pub fn new(base: BaseSpec, payload: ChartPayload) -> Self {
        Self { base, payload }
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        match &self.payload {
            ChartPayload::Cartesian(payload) => payload.series.len(),
            ChartPayload::Pie(_) | ChartPayload::Treemap(_) | ChartPayload::Sunburst(_) => 1,
        }
    }

    /// Number of top-level data items across all series.
    #[must_use]
    pub fn datum_count(&self) -> usize {
        match &self.payload {
            ChartPayload::Cartesian(payload) => {
                payload.series.iter().map(|series| series.data.len()).sum()
            }
            ChartPayload::Pie(payload) => payload.series[0].data.len(),
            ChartPayload::Treemap(payload) => payload.series[0].data.len(),
            ChartPayload::Sunburst(payload) => payload.series[0].data.len(),
        }
    }

    #[must_use]
    pub fn as_cartesian(&self) -> Option<&CartesianPayload> {
        match &self.payload {
            ChartPayload::Cartesian(payload) => Some(payload),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_pie(&self) -> Option<&PieSeries> {
        match &self.payload {
            ChartPayload::Pie(payload) => Some(&payload.series[0]),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_treemap(&self) -> Option<&TreemapSeries> {
        match &self.payload {
            ChartPayload::Treemap(payload) => Some(&payload.series[0]),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sunburst(&self) -> Option<&SunburstSeries> {
        match &self.payload {
            ChartPayload::Sunburst(payload) => Some(&payload.series[0]),
            _ => None,
        }
    }

    /// Rejects non-finite data values, which JSON cannot carry.
    pub fn validate(&self) -> ChartResult<()> {
        let finite = match &self.payload {
            ChartPayload::Cartesian(payload) => payload.series.iter().all(|s| s.is_finite()),
            ChartPayload::Pie(payload) => payload.series[0].is_finite(),
            ChartPayload::Treemap(payload) => payload.series[0].is_finite(),
            ChartPayload::Sunburst(payload) => payload.series[0].is_finite(),
        };
        if finite {
            Ok(())
        } else {
            Err(ChartError::InvalidData(
                "chart spec data values must be finite".to_owned(),
            ))
        }
    }
}
