use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::adapters;
use crate::core::UniversalChartState;
use crate::error::{ChartError, ChartResult};
use crate::render::ChartSpec;

use super::ChartTheme;

/// Turns a universal chart state into the spec of one chart type.
///
/// Implementations must be pure: no mutation of the state, same output for the
/// same input. Closures with the right signature are adapters too.
pub trait ChartAdapter: Send + Sync {
    fn adapt(&self, state: &UniversalChartState) -> ChartSpec;
}

impl<F> ChartAdapter for F
where
    F: Fn(&UniversalChartState) -> ChartSpec + Send + Sync,
{
    fn adapt(&self, state: &UniversalChartState) -> ChartSpec {
        self(state)
    }
}

/// Chart-type id to adapter mapping, owned by the composition root.
///
/// Filled once at startup and read-only afterwards.
#[derive(Clone, Default)]
pub struct AdapterRegistry {
    adapters: IndexMap<String, Arc<dyn ChartAdapter>>,
}

impl AdapterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every adapter shipped with the crate.
    #[must_use]
    pub fn with_builtin_adapters(theme: Arc<ChartTheme>) -> Self {
        let mut registry = Self::new();
        adapters::register_builtin(&mut registry, &theme);
        registry
    }

    /// Registers `adapter` under `chart_type`, replacing any previous one.
    pub fn register(&mut self, chart_type: impl Into<String>, adapter: impl ChartAdapter + 'static) {
        self.register_shared(chart_type, Arc::new(adapter));
    }

    /// Like [`Self::register`] for an adapter the caller keeps a handle to.
    pub fn register_shared(&mut self, chart_type: impl Into<String>, adapter: Arc<dyn ChartAdapter>) {
        let chart_type = chart_type.into();
        let replaced = self.adapters.insert(chart_type.clone(), adapter).is_some();
        debug!(chart_type = %chart_type, replaced, "registered chart adapter");
    }

    /// Looks up the adapter for `chart_type`.
    pub fn adapter(&self, chart_type: &str) -> ChartResult<Arc<dyn ChartAdapter>> {
        self.adapters.get(chart_type).cloned().ok_or_else(|| {
            warn!(chart_type, "chart type has no registered adapter");
            ChartError::UnregisteredChartType {
                chart_type: chart_type.to_owned(),
            }
        })
    }

    #[must_use]
    pub fn contains(&self, chart_type: &str) -> bool {
        self.adapters.contains_key(chart_type)
    }

    /// Registered chart types in registration order.
    pub fn chart_types(&self) -> impl Iterator<Item = &str> {
        self.adapters.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Runs the adapter registered for `state.chart_type`.
    pub fn dispatch(&self, state: &UniversalChartState) -> ChartResult<ChartSpec> {
        let adapter = self.adapter(&state.chart_type)?;
        let spec = adapter.adapt(state);
        let capabilities = state.fields.capabilities();
        debug!(
            chart_type = %state.chart_type,
            observations = state.observations.len(),
            categorical = capabilities.supports_categorical(),
            cartesian = capabilities.supports_cartesian(),
            series = spec.series_count(),
            data = spec.datum_count(),
            "dispatched chart adapter"
        );
        Ok(spec)
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("chart_types", &self.adapters.keys().collect::<Vec<_>>())
            .finish()
    }
}
