//! Engine-facing services: formatting resolver, theme provider, adapter
//! registry and the engine that ties them to a renderer.

mod engine;
mod engine_config;
mod formatting;
mod json_contract;
mod registry;
mod theme;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use formatting::{
    AxisOrientation, DEFAULT_ANIMATION_DURATION_MS, ResolvedFormatting, animation_duration,
    apply_axis_formatting, legend_spec, resolve_formatting, resolve_formatting_config,
    tooltip_spec,
};
pub use json_contract::{CHART_SPEC_JSON_SCHEMA_V1, ChartSpecJsonContractV1};
pub use registry::{AdapterRegistry, ChartAdapter};
pub use theme::ChartTheme;
