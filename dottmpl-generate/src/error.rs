//! Error types for dottmpl-generate.

use std::path::PathBuf;

use thiserror::Error;

use dottmpl_core::{ConfigError, PathError};
use dottmpl_git::GitError;
use dottmpl_renderer::RenderError;

/// All errors that can arise from a generation run.
///
/// Every error aborts the run; nothing is retried.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The working directory is not inside a git work tree.
    #[error("not a git repository")]
    NotARepository,

    /// The repository root reported by git is not an accessible directory.
    #[error("cannot enter git root {path}: {source}")]
    Chdir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Flat classification of a [`GenerateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyPath,
    UserNotFound,
    HomeNotFound,
    NotARepository,
    Chdir,
    NoRemoteUrl,
    InvalidRemoteUrl,
    /// Config file missing, unreadable, or malformed.
    Config,
    TemplateNotFound,
    /// Template unreadable or syntactically invalid.
    TemplateParse,
    TemplateExecution,
    OutputWrite,
}

impl GenerateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::NotARepository => ErrorKind::NotARepository,
            GenerateError::Chdir { .. } => ErrorKind::Chdir,
            GenerateError::Git(e) => match e {
                GitError::NotARepository => ErrorKind::NotARepository,
                GitError::NoRemoteUrl => ErrorKind::NoRemoteUrl,
                GitError::InvalidRemoteUrl { .. } => ErrorKind::InvalidRemoteUrl,
            },
            GenerateError::Config(e) => match e {
                ConfigError::TemplateNotFound { .. } => ErrorKind::TemplateNotFound,
                ConfigError::HomeNotFound => ErrorKind::HomeNotFound,
                ConfigError::Io { .. } | ConfigError::Parse { .. } | ConfigError::NotFound { .. } => {
                    ErrorKind::Config
                }
            },
            GenerateError::Path(e) => match e {
                PathError::EmptyPath => ErrorKind::EmptyPath,
                PathError::UserNotFound { .. } => ErrorKind::UserNotFound,
                PathError::HomeNotFound => ErrorKind::HomeNotFound,
            },
            GenerateError::Render(e) => match e {
                RenderError::TemplateRead { .. } | RenderError::TemplateParse { .. } => {
                    ErrorKind::TemplateParse
                }
                RenderError::TemplateExecution { .. } => ErrorKind::TemplateExecution,
                RenderError::OutputWrite { .. } => ErrorKind::OutputWrite,
            },
        }
    }
}
