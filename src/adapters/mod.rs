//! Built-in chart adapters, one module per chart type.
//!
//! Every module exposes `CHART_TYPE`, an adapter value holding the shared
//! theme, a pure `*_spec` function and `register`.

pub mod area;
pub mod bar;
mod cartesian;
pub mod column;
pub mod line;
pub mod pie;
pub mod scatter;
pub mod sunburst;
pub mod treemap;

use std::sync::Arc;

use indexmap::IndexSet;

use crate::api::{AdapterRegistry, ChartTheme};
use crate::core::ChartItem;

pub use area::AreaAdapter;
pub use bar::BarAdapter;
pub use column::ColumnAdapter;
pub use line::LineAdapter;
pub use pie::PieAdapter;
pub use scatter::ScatterAdapter;
pub use sunburst::SunburstAdapter;
pub use treemap::TreemapAdapter;

/// Chart types registered by [`register_builtin`].
pub const BUILTIN_CHART_TYPES: [&str; 8] = [
    area::CHART_TYPE,
    bar::CHART_TYPE,
    column::CHART_TYPE,
    line::CHART_TYPE,
    pie::CHART_TYPE,
    scatter::CHART_TYPE,
    sunburst::CHART_TYPE,
    treemap::CHART_TYPE,
];

pub fn register_builtin(registry: &mut AdapterRegistry, theme: &Arc<ChartTheme>) {
    area::register(registry, theme);
    bar::register(registry, theme);
    column::register(registry, theme);
    line::register(registry, theme);
    pie::register(registry, theme);
    scatter::register(registry, theme);
    sunburst::register(registry, theme);
    treemap::register(registry, theme);
}

/// Distinct top-level item names, in item order.
pub(crate) fn item_names(items: &[ChartItem]) -> Vec<String> {
    let names: IndexSet<String> = items.iter().map(|item| item.name.clone()).collect();
    names.into_iter().collect()
}
