use serde::{Deserialize, Serialize};

use crate::core::{Bounds, LegendPosition, ZoomWindow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSpec {
    pub show: bool,
    pub text: String,
    pub left: String,
}

impl TitleSpec {
    #[must_use]
    pub fn new(show: bool, text: impl Into<String>) -> Self {
        Self {
            show,
            text: text.into(),
            left: "center".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Item,
    Axis,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipSpec {
    pub show: bool,
    pub trigger: TooltipTrigger,
    pub confine: bool,
}

impl TooltipSpec {
    /// Tooltip switched off entirely.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            show: false,
            trigger: TooltipTrigger::None,
            confine: false,
        }
    }

    /// Per-item tooltip, used by pie-like and hierarchical charts.
    #[must_use]
    pub fn item() -> Self {
        Self {
            show: true,
            trigger: TooltipTrigger::Item,
            confine: true,
        }
    }

    /// Axis-wide tooltip, used by cartesian charts.
    #[must_use]
    pub fn axis() -> Self {
        Self {
            show: true,
            trigger: TooltipTrigger::Axis,
            confine: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orient {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendSpec {
    pub show: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub position: LegendPosition,
    pub orient: Orient,
    pub data: Vec<String>,
}

impl LegendSpec {
    #[must_use]
    pub fn new(show: bool, position: LegendPosition, data: Vec<String>) -> Self {
        let orient = match position {
            LegendPosition::Top | LegendPosition::Bottom => Orient::Horizontal,
            LegendPosition::Left | LegendPosition::Right => Orient::Vertical,
        };
        Self {
            show,
            kind: "scroll".to_owned(),
            position,
            orient,
            data,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabelSpec {
    pub show: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    pub hide_overlap: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitLineSpec {
    pub show: bool,
}

/// One cartesian axis.
///
/// Formatting flags are merged onto an existing axis with
/// [`crate::api::apply_axis_formatting`], which leaves every other field as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    pub show: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_gap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub axis_label: AxisLabelSpec,
    pub split_line: SplitLineSpec,
}

impl AxisSpec {
    #[must_use]
    pub fn category(labels: Vec<String>) -> Self {
        Self {
            kind: AxisKind::Category,
            show: true,
            data: labels,
            boundary_gap: Some(true),
            name: None,
            axis_label: AxisLabelSpec {
                show: true,
                rotate: None,
                hide_overlap: true,
            },
            split_line: SplitLineSpec { show: false },
        }
    }

    #[must_use]
    pub fn value() -> Self {
        Self {
            kind: AxisKind::Value,
            show: true,
            data: Vec::new(),
            boundary_gap: None,
            name: None,
            axis_label: AxisLabelSpec {
                show: true,
                rotate: None,
                hide_overlap: true,
            },
            split_line: SplitLineSpec { show: true },
        }
    }

    #[must_use]
    pub fn with_boundary_gap(mut self, boundary_gap: bool) -> Self {
        self.boundary_gap = Some(boundary_gap);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataZoomKind {
    Slider,
    Inside,
}

/// Zoom control bound to one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataZoomSpec {
    #[serde(rename = "type")]
    pub kind: DataZoomKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<usize>,
    pub start: f64,
    pub end: f64,
}

impl DataZoomSpec {
    #[must_use]
    pub fn x(kind: DataZoomKind, window: ZoomWindow) -> Self {
        Self {
            kind,
            x_axis_index: Some(0),
            y_axis_index: None,
            start: window.start,
            end: window.end,
        }
    }

    #[must_use]
    pub fn y(kind: DataZoomKind, window: ZoomWindow) -> Self {
        Self {
            kind,
            x_axis_index: None,
            y_axis_index: Some(0),
            start: window.start,
            end: window.end,
        }
    }
}

/// Plot area offsets, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSpec {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub contain_label: bool,
}

impl GridSpec {
    #[must_use]
    pub fn from_bounds(bounds: Bounds) -> Self {
        let margins = bounds.margins;
        Self {
            left: margins.left.max(0.0),
            right: margins.right.max(0.0),
            top: margins.top.max(0.0),
            bottom: margins.bottom.max(0.0),
            contain_label: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelPosition {
    Inside,
    Outside,
    Top,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotateMode {
    Tangential,
    Radial,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelRotate {
    Mode(RotateMode),
    Degrees(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSpec {
    pub show: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<LabelPosition>,
    /// Renderer template, e.g. `{b}` for the item name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<LabelRotate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<LabelAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
}

impl LabelSpec {
    #[must_use]
    pub fn hidden() -> Self {
        Self::shown(false)
    }

    #[must_use]
    pub fn shown(show: bool) -> Self {
        Self {
            show,
            position: None,
            formatter: None,
            rotate: None,
            align: None,
            padding: None,
        }
    }

    #[must_use]
    pub fn at(mut self, position: LabelPosition) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: impl Into<String>) -> Self {
        self.formatter = Some(formatter.into());
        self
    }

    #[must_use]
    pub fn with_rotate(mut self, rotate: LabelRotate) -> Self {
        self.rotate = Some(rotate);
        self
    }

    #[must_use]
    pub fn with_align(mut self, align: LabelAlign) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_width: Option<f64>,
}

impl ItemStyle {
    #[must_use]
    pub fn colored(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }
}

/// Pre-rendered tooltip text attached to one datum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTooltip {
    pub formatter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaStyle {
    pub opacity: f64,
}
