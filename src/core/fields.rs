use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::core::{FieldValue, Observation};

/// Pure read of one logical role from an observation.
pub type Accessor<T> = Arc<dyn Fn(&Observation) -> Option<T> + Send + Sync>;

/// Sub-levels below the segment for hierarchical charts, outermost first.
pub type HierarchyPath = SmallVec<[String; 4]>;

/// Field accessors keyed by logical role.
///
/// A `None` accessor means the capability is unavailable for the current
/// state; adapters degrade to empty output instead of failing.
#[derive(Clone, Default)]
pub struct Fields {
    pub x: Option<Accessor<FieldValue>>,
    pub y: Option<Accessor<f64>>,
    pub segment: Option<Accessor<String>>,
    pub label: Option<Accessor<String>>,
    pub hierarchy: Option<Accessor<HierarchyPath>>,
}

/// Which roles a state can serve, as plain flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCapabilities {
    pub x: bool,
    pub y: bool,
    pub segment: bool,
    pub label: bool,
    pub hierarchy: bool,
}

impl FieldCapabilities {
    /// Categorical and hierarchical shaping need both a segment and a measure.
    #[must_use]
    pub fn supports_categorical(self) -> bool {
        self.segment && self.y
    }

    #[must_use]
    pub fn supports_cartesian(self) -> bool {
        self.x && self.y
    }
}

impl Fields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn capabilities(&self) -> FieldCapabilities {
        FieldCapabilities {
            x: self.x.is_some(),
            y: self.y.is_some(),
            segment: self.segment.is_some(),
            label: self.label.is_some(),
            hierarchy: self.hierarchy.is_some(),
        }
    }

    #[must_use]
    pub fn with_x(
        mut self,
        accessor: impl Fn(&Observation) -> Option<FieldValue> + Send + Sync + 'static,
    ) -> Self {
        self.x = Some(Arc::new(accessor));
        self
    }

    #[must_use]
    pub fn with_y(
        mut self,
        accessor: impl Fn(&Observation) -> Option<f64> + Send + Sync + 'static,
    ) -> Self {
        self.y = Some(Arc::new(accessor));
        self
    }

    #[must_use]
    pub fn with_segment(
        mut self,
        accessor: impl Fn(&Observation) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.segment = Some(Arc::new(accessor));
        self
    }

    #[must_use]
    pub fn with_label(
        mut self,
        accessor: impl Fn(&Observation) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.label = Some(Arc::new(accessor));
        self
    }

    #[must_use]
    pub fn with_hierarchy(
        mut self,
        accessor: impl Fn(&Observation) -> Option<HierarchyPath> + Send + Sync + 'static,
    ) -> Self {
        self.hierarchy = Some(Arc::new(accessor));
        self
    }

    /// Reads `x` from the observation key `key`.
    #[must_use]
    pub fn with_x_key(self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.with_x(move |d| d.field_value(&key))
    }

    /// Reads `y` from `key`; non-numeric values read as missing.
    #[must_use]
    pub fn with_y_key(self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.with_y(move |d| d.number(&key))
    }

    #[must_use]
    pub fn with_segment_key(self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.with_segment(move |d| d.text(&key))
    }

    #[must_use]
    pub fn with_label_key(self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.with_label(move |d| d.text(&key))
    }

    /// Builds the hierarchy path from `keys`, stopping at the first missing level.
    #[must_use]
    pub fn with_hierarchy_keys<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        self.with_hierarchy(move |d| {
            let path: HierarchyPath = keys.iter().map_while(|key| d.text(key)).collect();
            Some(path)
        })
    }
}

impl fmt::Debug for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fields")
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

/// Drops non-finite numbers so malformed values behave like missing ones.
#[must_use]
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// `y ?? 0` with NaN and infinities treated as missing.
#[must_use]
pub fn value_or_zero(value: Option<f64>) -> f64 {
    finite(value).unwrap_or(0.0)
}
