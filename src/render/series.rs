use serde::{Deserialize, Serialize};

use crate::core::{ChartItem, Metadata};

use super::components::{AreaStyle, ItemStyle, ItemTooltip, LabelSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Line,
    Bar,
    Scatter,
    Pie,
    Treemap,
    Sunburst,
}

/// Named, colored datum of pie, treemap and sunburst series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataItem {
    pub name: String,
    pub value: f64,
    pub item_style: ItemStyle,
    pub tooltip: ItemTooltip,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DataItem>,
}

impl DataItem {
    /// Converts a shaped item, recursing into children.
    #[must_use]
    pub fn from_item(item: &ChartItem, metadata: &Metadata) -> Self {
        Self {
            name: item.name.clone(),
            value: item.value,
            item_style: ItemStyle::colored(item.color.clone()),
            tooltip: ItemTooltip {
                formatter: metadata.tooltip_text(&item.name, item.value),
            },
            children: item
                .children
                .iter()
                .map(|child| Self::from_item(child, metadata))
                .collect(),
        }
    }

    #[must_use]
    pub fn from_items(items: &[ChartItem], metadata: &Metadata) -> Vec<Self> {
        items
            .iter()
            .map(|item| Self::from_item(item, metadata))
            .collect()
    }

    fn is_finite(&self) -> bool {
        self.value.is_finite() && self.children.iter().all(Self::is_finite)
    }
}

/// Value of a cartesian datum: a category-aligned value (`null` for gaps) or
/// an `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatumValue {
    Single(Option<f64>),
    Pair([f64; 2]),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartesianDatum {
    pub value: DatumValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<ItemTooltip>,
}

impl CartesianDatum {
    /// Category-aligned value; gaps carry no tooltip.
    #[must_use]
    pub fn single(value: Option<f64>, name: &str, metadata: &Metadata) -> Self {
        Self {
            value: DatumValue::Single(value),
            tooltip: value.map(|value| ItemTooltip {
                formatter: metadata.tooltip_text(name, value),
            }),
        }
    }

    #[must_use]
    pub fn pair(x: f64, y: f64, name: &str, metadata: &Metadata) -> Self {
        Self {
            value: DatumValue::Pair([x, y]),
            tooltip: Some(ItemTooltip {
                formatter: metadata.tooltip_text(name, y),
            }),
        }
    }

    fn is_finite(&self) -> bool {
        match self.value {
            DatumValue::Single(value) => value.is_none_or(f64::is_finite),
            DatumValue::Pair([x, y]) => x.is_finite() && y.is_finite(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartesianSeries {
    #[serde(rename = "type")]
    pub kind: SeriesType,
    pub name: String,
    pub data: Vec<CartesianDatum>,
    pub item_style: ItemStyle,
    pub label: LabelSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_nulls: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_symbol: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
}

impl CartesianSeries {
    #[must_use]
    pub fn new(kind: SeriesType, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            data: Vec::new(),
            item_style: ItemStyle::colored(color),
            label: LabelSpec::hidden(),
            stack: None,
            area_style: None,
            connect_nulls: None,
            show_symbol: None,
            symbol_size: None,
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.data.iter().all(CartesianDatum::is_finite)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelLineSpec {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSeries {
    #[serde(rename = "type")]
    pub kind: SeriesType,
    pub name: String,
    /// Inner and outer radius, as percentages of the smaller side.
    pub radius: [String; 2],
    pub center: [String; 2],
    pub avoid_label_overlap: bool,
    pub label: LabelSpec,
    pub label_line: LabelLineSpec,
    pub data: Vec<DataItem>,
}

impl PieSeries {
    pub(crate) fn is_finite(&self) -> bool {
        self.data.iter().all(DataItem::is_finite)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeClick {
    #[serde(rename = "zoomToNode")]
    ZoomToNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreadcrumbSpec {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapLevel {
    pub item_style: ItemStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapSeries {
    #[serde(rename = "type")]
    pub kind: SeriesType,
    pub name: String,
    pub roam: bool,
    pub node_click: NodeClick,
    pub breadcrumb: BreadcrumbSpec,
    pub label: LabelSpec,
    pub upper_label: LabelSpec,
    /// Styling per nesting level, outermost first.
    pub levels: Vec<TreemapLevel>,
    pub data: Vec<DataItem>,
}

impl TreemapSeries {
    pub(crate) fn is_finite(&self) -> bool {
        self.data.iter().all(DataItem::is_finite)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SunburstLevel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<[String; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SunburstSeries {
    #[serde(rename = "type")]
    pub kind: SeriesType,
    pub name: String,
    pub radius: [String; 2],
    /// `None` serializes as `null`, which keeps the data order.
    pub sort: Option<SortOrder>,
    /// Ring table; index 0 is the center disc.
    pub levels: Vec<SunburstLevel>,
    pub data: Vec<DataItem>,
}

impl SunburstSeries {
    pub(crate) fn is_finite(&self) -> bool {
        self.data.iter().all(DataItem::is_finite)
    }
}
