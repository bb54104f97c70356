//! chart-adapters: universal chart-adapter engine.
//!
//! A chart-type-agnostic [`UniversalChartState`] goes in, a declarative,
//! serializable [`ChartSpec`] for one concrete chart type comes out. Adapters
//! are looked up through an injectable [`AdapterRegistry`]; rendering is left
//! to whatever [`render::Renderer`] the host plugs in.

pub mod adapters;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    AdapterRegistry, ChartAdapter, ChartEngine, ChartEngineConfig, ChartTheme, ResolvedFormatting,
    resolve_formatting,
};
pub use core::UniversalChartState;
pub use error::{ChartError, ChartResult};
pub use render::ChartSpec;
