//! Locating and loading `config.yaml`.
//!
//! # Location
//!
//! ```text
//! $XDG_CONFIG_HOME/gh-dot-tmpl/config.yaml    (XDG_CONFIG_HOME set and non-empty)
//! $HOME/.config/gh-dot-tmpl/config.yaml       (otherwise)
//! ```
//!
//! [`config_path_from`] is the pure form used in tests; [`config_path`] reads
//! the process environment and delegates to it.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::types::Config;

/// Directory name under the config root.
pub const APP_DIR: &str = "gh-dot-tmpl";
/// File name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

/// Compute the config path from an explicit `XDG_CONFIG_HOME` value and home
/// directory. An empty `xdg` counts as unset.
pub fn config_path_from(
    xdg_config_home: Option<&OsStr>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigError> {
    let root = match xdg_config_home.filter(|v| !v.is_empty()) {
        Some(xdg) => PathBuf::from(xdg),
        None => home.ok_or(ConfigError::HomeNotFound)?.join(".config"),
    };
    Ok(root.join(APP_DIR).join(CONFIG_FILE))
}

/// `config_path_from` convenience wrapper reading `$XDG_CONFIG_HOME` and `$HOME`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg = std::env::var_os("XDG_CONFIG_HOME");
    let home = std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir);
    config_path_from(xdg.as_deref(), home.as_deref())
}

/// Load and decode the config file at `path`.
///
/// Returns `ConfigError::NotFound` if absent and `ConfigError::Parse`
/// (with path + line context) if malformed.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loaded config from {}", path.display());
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
