use std::cmp::Reverse;

use ordered_float::OrderedFloat;

/// Normalized item produced by categorical and hierarchical shaping.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartItem {
    pub name: String,
    pub value: f64,
    pub color: String,
    pub children: Vec<ChartItem>,
}

impl ChartItem {
    #[must_use]
    pub fn leaf(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
            children: Vec::new(),
        }
    }

    /// Number of nesting levels, counting this item as one.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

/// Stable descending sort by value; equal values keep input order.
pub fn sort_descending(items: &mut [ChartItem]) {
    items.sort_by_key(|item| Reverse(OrderedFloat(item.value)));
}

/// Deepest nesting level across `items`; `0` for an empty list.
#[must_use]
pub fn max_depth(items: &[ChartItem]) -> usize {
    items.iter().map(ChartItem::depth).max().unwrap_or(0)
}
