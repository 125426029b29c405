use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DeployError, Result};

/// User-level configuration loaded from `~/.config/claude-md-deploy/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct UserConfig {
    /// Default templates directory. `~` and `$VAR` are expanded.
    #[serde(default)]
    pub templates_dir: Option<String>,

    /// Default for prompting; `--no-interactive` always wins.
    #[serde(default)]
    pub interactive: Option<bool>,
}

/// Get the path to the user config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("claude-md-deploy").join("config.toml"))
}

/// Load user configuration from the platform config directory.
///
/// Returns `Ok(None)` if the config file does not exist.
/// Returns `Err` if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<Option<UserConfig>> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(None),
    }
}

pub fn load_from(path: &Path) -> Result<Option<UserConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| DeployError::Io {
        context: format!("reading user config {}", path.display()),
        source: e,
    })?;

    let config: UserConfig = toml::from_str(&content).map_err(|e| DeployError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("loaded user config from {}", path.display());
    Ok(Some(config))
}
