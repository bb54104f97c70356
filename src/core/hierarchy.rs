use indexmap::IndexMap;
use tracing::trace;

use crate::core::categorical::categorical_items;
use crate::core::fields::value_or_zero;
use crate::core::item::sort_descending;
use crate::core::{ChartItem, UniversalChartState};

/// Ordering applied to nested levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyOrder {
    /// Every level sorted by value, largest first (treemap).
    Descending,
    /// Only the top level is sorted; nested levels keep first-seen order
    /// (sunburst, where radial position follows the data).
    Natural,
}

#[derive(Debug)]
struct Node {
    color: String,
    own_value: f64,
    children: IndexMap<String, Node>,
}

impl Node {
    fn new(color: String) -> Self {
        Self {
            color,
            own_value: 0.0,
            children: IndexMap::new(),
        }
    }

    fn into_item(self, name: String, order: HierarchyOrder) -> ChartItem {
        let mut children: Vec<ChartItem> = self
            .children
            .into_iter()
            .map(|(child_name, child)| child.into_item(child_name, order))
            .collect();
        if order == HierarchyOrder::Descending {
            sort_descending(&mut children);
        }
        let value = self.own_value + children.iter().map(|child| child.value).sum::<f64>();
        ChartItem {
            name,
            value,
            color: self.color,
            children,
        }
    }
}

/// Shapes observations into nested items for treemap/sunburst charts.
///
/// Without a hierarchy accessor the result equals [`categorical_items`].
/// With one, the segment is the top level and the accessor's path adds the
/// levels below it; observations sharing a path are summed, parents carry the
/// sum of their descendants, and children inherit the top-level color. The
/// same positive-value rule as categorical shaping applies per observation.
#[must_use]
pub fn hierarchy_items(state: &UniversalChartState, order: HierarchyOrder) -> Vec<ChartItem> {
    let Some(get_path) = &state.fields.hierarchy else {
        return categorical_items(state);
    };
    let (Some(get_segment), Some(get_y)) = (&state.fields.segment, &state.fields.y) else {
        trace!(
            capabilities = ?state.fields.capabilities(),
            "hierarchy shaping skipped: missing accessor"
        );
        return Vec::new();
    };

    let segments = state.effective_segments();
    let mut roots: IndexMap<String, Node> = IndexMap::new();
    for d in &state.observations {
        let Some(segment) = get_segment(d) else {
            continue;
        };
        if !segments.contains(&segment) {
            continue;
        }
        let value = value_or_zero(get_y(d));
        if value <= 0.0 {
            continue;
        }

        let root = roots
            .entry(segment.clone())
            .or_insert_with(|| Node::new(state.colors.color(&segment)));
        let color = root.color.clone();
        let mut node = root;
        for level in get_path(d).unwrap_or_default() {
            node = node
                .children
                .entry(level)
                .or_insert_with(|| Node::new(color.clone()));
        }
        node.own_value += value;
    }

    let mut items: Vec<ChartItem> = roots
        .into_iter()
        .map(|(name, node)| node.into_item(name, order))
        .collect();
    sort_descending(&mut items);

    trace!(
        observations = state.observations.len(),
        roots = items.len(),
        "hierarchy shaping"
    );
    items
}
