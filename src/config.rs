//! Engine configuration
//!
//! Passed from JavaScript when the module is initialized. Every field has
//! a default, so an empty object (or `undefined`) is a valid config.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Maximum log level: "off", "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
    /// Check every generated tuple set for broken transformation rules
    pub diagnose_tuples: bool,
    /// Load the compiled-in placement dataset during initialization instead
    /// of waiting for `loadPlacementData`
    pub load_embedded_data: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            diagnose_tuples: true,
            load_embedded_data: false,
        }
    }
}

impl EngineConfig {
    /// Parsed log level; unknown names fall back to `Info`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
