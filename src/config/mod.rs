pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, DisplayConfig, LoggingConfig};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("finviz")
        .join("config.toml")
}

/// Load the config from the default location, or defaults if there is none.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("finviz-no-such-dir/config.toml");
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.display.flash_dwell_ms, 2000);
    }

    #[test]
    fn test_bad_file_reports_path() {
        let dir = std::env::temp_dir().join(format!("finviz-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[display]\nflash_dwell_ms = \"soon\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{}", err).contains("config.toml"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
