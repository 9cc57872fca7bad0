//! Error types for dottmpl-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading the configuration file or looking up a template in it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure while reading the config file.
    #[error("unable to open config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error — includes file path and line context from serde_yaml.
    #[error("unable to decode config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The config file did not exist at the expected path.
    #[error("config file not found at {path}")]
    NotFound { path: PathBuf },

    /// Neither `$XDG_CONFIG_HOME` nor a home directory is available.
    #[error("cannot determine home directory; set $HOME or $XDG_CONFIG_HOME")]
    HomeNotFound,

    /// The requested template name is not registered.
    /// `available` lists the registered names, comma-separated, or `none`.
    #[error("template '{name}' not found in config (available: {available})")]
    TemplateNotFound { name: String, available: String },
}

/// Errors from `~` expansion.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("no path provided")]
    EmptyPath,

    /// `~username` lookup failed; `message` is the lookup's own reason.
    #[error("user '{username}' not found: {message}")]
    UserNotFound { username: String, message: String },

    /// `~` or `~/…` used but `$HOME` is unset and no home directory is known.
    #[error("cannot determine home directory; set $HOME")]
    HomeNotFound,
}
