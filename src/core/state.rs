use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;

use crate::core::{Bounds, ChartConfig, ColorScale, Fields, Observation};

/// Host-supplied number formatter for display text.
pub type NumberFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Display helpers that affect text only, never layout.
#[derive(Clone, Default)]
pub struct Metadata {
    pub format_number: Option<NumberFormatter>,
    /// Series name used when the chart has no segment dimension.
    pub measure_label: Option<String>,
}

impl Metadata {
    #[must_use]
    pub fn with_format_number(
        mut self,
        formatter: impl Fn(f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.format_number = Some(Arc::new(formatter));
        self
    }

    #[must_use]
    pub fn with_measure_label(mut self, label: impl Into<String>) -> Self {
        self.measure_label = Some(label.into());
        self
    }

    /// Formats `value` with the host formatter, or as the raw number.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        match &self.format_number {
            Some(formatter) => formatter(value),
            None => value.to_string(),
        }
    }

    /// Tooltip text in the `name: formattedValue` shape.
    #[must_use]
    pub fn tooltip_text(&self, name: &str, value: f64) -> String {
        format!("{name}: {}", self.format_value(value))
    }
}

impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metadata")
            .field("format_number", &self.format_number.is_some())
            .field("measure_label", &self.measure_label)
            .finish()
    }
}

/// Chart-type-agnostic input of every adapter.
///
/// Adapters only read it; a new state is built for every render.
#[derive(Debug, Clone)]
pub struct UniversalChartState {
    pub chart_type: String,
    pub observations: Vec<Observation>,
    pub fields: Fields,
    pub segments: Vec<String>,
    pub colors: Arc<dyn ColorScale>,
    pub chart_config: ChartConfig,
    pub metadata: Metadata,
    pub bounds: Bounds,
}

impl UniversalChartState {
    #[must_use]
    pub fn new(
        chart_type: impl Into<String>,
        observations: Vec<Observation>,
        fields: Fields,
        colors: Arc<dyn ColorScale>,
    ) -> Self {
        Self {
            chart_type: chart_type.into(),
            observations,
            fields,
            segments: Vec::new(),
            colors,
            chart_config: ChartConfig::default(),
            metadata: Metadata::default(),
            bounds: Bounds::default(),
        }
    }

    #[must_use]
    pub fn with_segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments = segments.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_chart_config(mut self, chart_config: ChartConfig) -> Self {
        self.chart_config = chart_config;
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Segments used for coloring and legends.
    ///
    /// Pre-computed `segments` win; otherwise they are derived from the
    /// observations in first-seen order. Empty without a segment accessor.
    #[must_use]
    pub fn effective_segments(&self) -> IndexSet<String> {
        if !self.segments.is_empty() {
            return self.segments.iter().cloned().collect();
        }
        let Some(get_segment) = &self.fields.segment else {
            return IndexSet::new();
        };
        self.observations
            .iter()
            .filter_map(|d| get_segment(d))
            .collect()
    }
}
