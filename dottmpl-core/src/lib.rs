//! dottmpl core library — domain types, configuration, template registry,
//! and tilde path expansion.
//!
//! - [`types`] — newtypes and domain structs
//! - [`error`] — [`ConfigError`], [`PathError`]
//! - [`config`] — locate and load `config.yaml`
//! - [`registry`] — name → [`TemplateEntry`] lookup
//! - [`path`] — `~` / `~user` expansion

pub mod config;
pub mod error;
pub mod path;
pub mod registry;
pub mod types;

pub use config::{config_path, config_path_from, load_config};
pub use error::{ConfigError, PathError};
pub use path::{AccountLookup, PathResolver, SystemAccounts};
pub use registry::TemplateRegistry;
pub use types::{Config, RepositoryIdentity, TemplateConfig, TemplateEntry, TemplateName};
