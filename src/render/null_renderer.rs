use crate::error::ChartResult;
use crate::render::{ChartSpec, Renderer};

/// Renderer that only validates and keeps the last spec.
///
/// Used by tests and headless hosts that serialize specs themselves.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_series_count: usize,
    pub last_spec: Option<ChartSpec>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, spec: &ChartSpec) -> ChartResult<()> {
        spec.validate()?;
        self.render_count += 1;
        self.last_series_count = spec.series_count();
        self.last_spec = Some(spec.clone());
        Ok(())
    }
}
