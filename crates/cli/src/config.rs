//! Shell configuration loading.
//!
//! The config is a small read-only JSON file in the standard configuration
//! directory (`~/.config/atrium/config.json` on most platforms), overridable
//! with `--config` or an environment variable. A missing file is not an
//! error: every field has a compiled-in default, and partial files fill the
//! gaps from those defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use atrium_types::ShellConfig;
use dirs_next::config_dir;
use thiserror::Error;

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "ATRIUM_CONFIG";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Error surfaced when reading or parsing the config fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure (for example, permissions).
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON payload.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the shell configuration.
///
/// Resolution order: the explicit path, then [`CONFIG_PATH_ENV`], then the
/// default location. A path that does not exist yields the defaults.
pub fn load(explicit: Option<&Path>) -> Result<ShellConfig, ConfigError> {
    let path = resolve_config_path(explicit);
    if !path.exists() {
        return Ok(ShellConfig::default());
    }
    let raw = fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Default location for the shell's log file.
pub fn default_log_path() -> PathBuf {
    base_directory().join("logs").join("atrium.log")
}

fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = env::var_os(CONFIG_PATH_ENV)
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    base_directory().join(CONFIG_FILE_NAME)
}

fn base_directory() -> PathBuf {
    config_dir().unwrap_or_else(|| PathBuf::from(".")).join("atrium")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("atrium-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = scratch_path("missing");
        let config = load(Some(&path)).expect("defaults for a missing file");
        assert_eq!(config.compact_width, 80);
        assert_eq!(config.nav_items.len(), 5);
    }

    #[test]
    fn partial_file_fills_the_gaps() {
        let path = scratch_path("partial");
        fs::write(&path, r#"{"soundtrack": {"volume": 0.25}}"#).expect("write scratch config");

        let config = load(Some(&path)).expect("parse partial config");
        fs::remove_file(&path).ok();

        assert!((config.soundtrack.volume - 0.25).abs() < f32::EPSILON);
        assert!(!config.soundtrack.url.is_empty());
        assert_eq!(config.more_items.len(), 2);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch_path("malformed");
        fs::write(&path, "{not json").expect("write scratch config");

        let result = load(Some(&path));
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
