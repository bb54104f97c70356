//! Chart state model and the pure data-shaping utilities adapters build on.

pub mod categorical;
pub mod chart_config;
pub mod colors;
pub mod fields;
pub mod flat_series;
pub mod hierarchy;
pub mod item;
pub mod state;
pub mod types;
pub mod windowing;

pub use categorical::categorical_items;
pub use chart_config::{
    ChartConfig, FormattingConfig, InteractiveFiltersConfig, LegendPosition, TimeRangeFilter,
};
pub use colors::{ColorScale, OrdinalColorScale, UNKNOWN_SEGMENT_COLOR};
pub use fields::{Accessor, FieldCapabilities, Fields, HierarchyPath};
pub use flat_series::{AlignedSeries, FlatPoint, align_series, categories, flat_points, numeric_pairs};
pub use hierarchy::{HierarchyOrder, hierarchy_items};
pub use item::{ChartItem, max_depth, sort_descending};
pub use state::{Metadata, NumberFormatter, UniversalChartState};
pub use types::{Bounds, FieldValue, Margins, Observation};
pub use windowing::{ZoomWindow, zoom_window};
