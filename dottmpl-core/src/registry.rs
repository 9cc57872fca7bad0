//! In-memory template registry.
//!
//! Built once from a decoded [`Config`] and read-only afterwards; a new run
//! reloads the config wholesale.

use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::types::{Config, TemplateEntry, TemplateName};

/// Name → [`TemplateEntry`] mapping sourced from configuration.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    entries: BTreeMap<TemplateName, TemplateEntry>,
}

impl TemplateRegistry {
    pub fn from_config(config: Config) -> Self {
        let entries = config
            .templates
            .into_iter()
            .map(|(name, cfg)| {
                let name = TemplateName::from(name);
                (name.clone(), TemplateEntry::new(name, cfg))
            })
            .collect();
        TemplateRegistry { entries }
    }

    /// Look up `name`; absence is always an error, never a silent skip.
    pub fn lookup(&self, name: &str) -> Result<&TemplateEntry, ConfigError> {
        self.entries
            .get(&TemplateName::from(name))
            .ok_or_else(|| ConfigError::TemplateNotFound {
                name: name.to_owned(),
                available: self.available(),
            })
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &TemplateName> {
        self.entries.keys()
    }

    fn available(&self) -> String {
        if self.entries.is_empty() {
            return "none".to_owned();
        }
        self.names()
            .map(|n| n.0.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
