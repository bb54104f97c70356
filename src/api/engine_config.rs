use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartTheme;

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can ship the theme in their own config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartEngineConfig {
    pub theme: ChartTheme,
    /// Whether to register the adapters shipped with the crate.
    pub register_builtin_adapters: bool,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ChartTheme::default(),
            register_builtin_adapters: true,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Starts from an empty registry; every chart type must be registered by hand.
    #[must_use]
    pub fn without_builtin_adapters(mut self) -> Self {
        self.register_builtin_adapters = false;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse engine config: {e}"))
        })
    }
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
