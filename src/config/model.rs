//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::ledger::FinancialState;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Opening balances for the session.
    #[serde(default)]
    pub opening: FinancialState,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How amounts are rendered and how long a change stays highlighted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    #[serde(default = "default_flash_dwell_ms")]
    pub flash_dwell_ms: u64,
}

impl DisplayConfig {
    pub fn flash_dwell(&self) -> Duration {
        Duration::from_millis(self.flash_dwell_ms)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            thousands_separator: default_thousands_separator(),
            flash_dwell_ms: default_flash_dwell_ms(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_thousands_separator() -> String {
    ",".to_string()
}
fn default_flash_dwell_ms() -> u64 {
    2000
}
fn default_log_dir() -> String {
    "~/.local/share/finviz/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
