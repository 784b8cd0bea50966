//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` output goes to a daily file named
//! `finviz_<date>.log` in the configured log directory (default:
//! `~/.local/share/finviz/logs/`). Nothing is ever written to the terminal,
//! which belongs to the TUI.

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled or the file cannot be opened.
pub fn init(config: &LoggingConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }

    let log_dir = expand_home(&config.log_dir);
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let path = log_dir.join(log_file_name(&date));

    let file = fs::create_dir_all(&log_dir)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path))
        .ok()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .init();

    tracing::info!(path = %path.display(), "logging initialized");
    Some(path)
}

fn log_file_name(date: &str) -> String {
    format!("finviz_{}.log", date)
}

/// Expand a leading `~/` to the home directory.
fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    Path::new(dir).to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        assert_eq!(log_file_name("2026-10-18"), "finviz_2026-10-18.log");
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/finviz"), PathBuf::from("/var/log/finviz"));
        assert_eq!(expand_home("logs"), PathBuf::from("logs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_disabled_installs_nothing() {
        assert_eq!(init(&LoggingConfig::default()), None);
    }
}
