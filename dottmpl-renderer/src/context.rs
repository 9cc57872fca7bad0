//! Template context — the data record templates are rendered against.
//!
//! The field names `owner` and `repo` are what template authors write
//! (`{{ owner }}`, `{{ repo }}`); renaming them breaks every existing template.

use serde::{Deserialize, Serialize};

use dottmpl_core::types::RepositoryIdentity;

/// Substitution record exposed to templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    /// Repository owner (user or organisation).
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RenderContext {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RenderContext {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> tera::Context {
        let mut ctx = tera::Context::new();
        ctx.insert("owner", &self.owner);
        ctx.insert("repo", &self.repo);
        ctx
    }
}

impl From<&RepositoryIdentity> for RenderContext {
    fn from(id: &RepositoryIdentity) -> Self {
        RenderContext::new(id.owner.clone(), id.repo.clone())
    }
}
