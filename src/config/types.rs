//! Configuration types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
    /// Defaults for quote requests that omit them
    #[serde(default)]
    pub defaults: QuoteDefaults,
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Pretty-print JSON output
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            pretty_output: default_pretty_output(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_pretty_output() -> bool {
    true
}

/// Fallback values for quote requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteDefaults {
    /// Base delivery type used when none is given
    #[serde(default = "default_base_type")]
    pub base_type: String,
    /// Distance in kilometers used when none is given
    #[serde(default)]
    pub distance: Decimal,
}

impl Default for QuoteDefaults {
    fn default() -> Self {
        Self {
            base_type: default_base_type(),
            distance: Decimal::ZERO,
        }
    }
}

fn default_base_type() -> String {
    "courier".to_string()
}
