//! Domain types for gh-dot-tmpl.
//!
//! Template and output locations are kept as the raw strings from the config
//! file: they may carry a `~` prefix and are only turned into filesystem paths
//! when the generator resolves them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name of a template entry in the config.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateName(pub String);

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TemplateName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TemplateName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Config file shape
// ---------------------------------------------------------------------------

/// One `templates.<name>` block of `config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    /// Source template; may start with `~` or `~user`.
    pub template_file: String,
    /// Destination, relative to the repository root unless absolute.
    pub output_file: String,
}

/// Root of `config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateConfig>,
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A registered template: where to read it from and where to write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: TemplateName,
    pub template_file: String,
    pub output_file: String,
}

impl TemplateEntry {
    pub fn new(name: impl Into<TemplateName>, cfg: TemplateConfig) -> Self {
        TemplateEntry {
            name: name.into(),
            template_file: cfg.template_file,
            output_file: cfg.output_file,
        }
    }
}

/// `(owner, repo)` as parsed from the `origin` remote.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryIdentity {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
