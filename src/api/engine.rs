use std::sync::Arc;

use tracing::debug;

use crate::core::UniversalChartState;
use crate::error::ChartResult;
use crate::render::{ChartSpec, Renderer};

use super::{AdapterRegistry, ChartAdapter, ChartEngineConfig, ChartTheme};

/// Composition root: registry, theme and renderer in one place.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    theme: Arc<ChartTheme>,
    registry: AdapterRegistry,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.theme.validate()?;
        let theme = Arc::new(config.theme);
        let registry = if config.register_builtin_adapters {
            AdapterRegistry::with_builtin_adapters(Arc::clone(&theme))
        } else {
            AdapterRegistry::new()
        };
        debug!(adapters = registry.len(), "chart engine initialized");

        Ok(Self {
            renderer,
            theme,
            registry,
        })
    }

    /// Adds or replaces an adapter; meant for startup wiring.
    pub fn register_adapter(
        &mut self,
        chart_type: impl Into<String>,
        adapter: impl ChartAdapter + 'static,
    ) {
        self.registry.register(chart_type, adapter);
    }

    #[must_use]
    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    #[must_use]
    pub fn theme(&self) -> &ChartTheme {
        &self.theme
    }

    /// Dispatches `state` and returns the spec without rendering it.
    pub fn build_spec(&self, state: &UniversalChartState) -> ChartResult<ChartSpec> {
        self.registry.dispatch(state)
    }

    /// Dispatches `state` and hands the spec to the renderer.
    pub fn render(&mut self, state: &UniversalChartState) -> ChartResult<()> {
        let spec = self.registry.dispatch(state)?;
        self.renderer.render(&spec)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
