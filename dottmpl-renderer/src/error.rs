//! Error types for dottmpl-renderer.

use std::error::Error as _;
use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while rendering one template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template file could not be read.
    #[error("failed to read template file {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template body has invalid syntax.
    #[error("failed to parse template file {path}: {}", chain(.source))]
    TemplateParse {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    /// The template referenced something the context does not provide.
    #[error("failed to execute template {path}: {}", chain(.source))]
    TemplateExecution {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    /// The rendered bytes could not be written.
    #[error("failed to write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Tera keeps the useful detail ("Variable `x` not found…") in the source
/// chain; flatten it into one line.
fn chain(err: &tera::Error) -> String {
    let mut msg = err.to_string();
    let mut cur = err.source();
    while let Some(e) = cur {
        msg.push_str(": ");
        msg.push_str(&e.to_string());
        cur = e.source();
    }
    msg
}
