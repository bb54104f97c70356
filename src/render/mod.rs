mod components;
mod null_renderer;
mod series;
mod spec;

pub use components::{
    AreaStyle, AxisKind, AxisLabelSpec, AxisSpec, DataZoomKind, DataZoomSpec, GridSpec,
    ItemStyle, ItemTooltip, LabelAlign, LabelPosition, LabelRotate, LabelSpec, LegendSpec,
    Orient, RotateMode, SplitLineSpec, TextStyle, TitleSpec, TooltipSpec, TooltipTrigger,
};
pub use null_renderer::NullRenderer;
pub use series::{
    BreadcrumbSpec, CartesianDatum, CartesianSeries, DataItem, DatumValue, LabelLineSpec,
    NodeClick, PieSeries, SeriesType, SortOrder, SunburstLevel, SunburstSeries, TreemapLevel,
    TreemapSeries,
};
pub use spec::{
    BaseSpec, CartesianPayload, ChartPayload, ChartSpec, PiePayload, SunburstPayload,
    TreemapPayload,
};

use crate::error::ChartResult;

/// Contract implemented by whatever draws a spec.
///
/// The engine hands over a complete declarative spec; drawing, diffing and
/// animation belong to the backend.
pub trait Renderer {
    fn render(&mut self, spec: &ChartSpec) -> ChartResult<()>;
}
