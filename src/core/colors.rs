use std::fmt;

use indexmap::IndexMap;

/// Color used when a segment outside the scale's domain is requested.
pub const UNKNOWN_SEGMENT_COLOR: &str = "#cccccc";

/// Segment-to-color capability handed in with the chart state.
///
/// Implementations must return the same color for the same segment across
/// calls; adapters do not cache.
pub trait ColorScale: fmt::Debug + Send + Sync {
    fn color(&self, segment: &str) -> String;

    /// Ordered segment domain the scale was built from.
    fn domain(&self) -> &[String];
}

/// Ordinal scale assigning palette entries to segments in domain order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdinalColorScale {
    domain: Vec<String>,
    assigned: IndexMap<String, String>,
}

impl OrdinalColorScale {
    /// Cycles `palette` over `domain`. An empty palette maps every segment to
    /// [`UNKNOWN_SEGMENT_COLOR`].
    #[must_use]
    pub fn new<I, S>(domain: I, palette: &[String]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut assigned = IndexMap::new();
        for segment in domain {
            let segment = segment.into();
            if assigned.contains_key(&segment) {
                continue;
            }
            let color = if palette.is_empty() {
                UNKNOWN_SEGMENT_COLOR.to_owned()
            } else {
                palette[assigned.len() % palette.len()].clone()
            };
            assigned.insert(segment, color);
        }
        let domain = assigned.keys().cloned().collect();
        Self { domain, assigned }
    }
}

impl ColorScale for OrdinalColorScale {
    fn color(&self, segment: &str) -> String {
        self.assigned
            .get(segment)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_SEGMENT_COLOR.to_owned())
    }

    fn domain(&self) -> &[String] {
        &self.domain
    }
}
