//! Tera rendering engine — [`Renderer`].
//!
//! One template file in, one output file out:
//!
//! 1. Read and parse the template body (`TemplateRead` / `TemplateParse`).
//! 2. Render against [`RenderContext`]; unknown variables are errors
//!    (`TemplateExecution`).
//! 3. Create or truncate the output with mode `0600` and write the bytes
//!    (`OutputWrite`). Parent directories are not created.
//!
//! A failure in step 3 may leave the output truncated or absent.

use std::io::Write;
use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::RenderContext;
use crate::error::RenderError;

/// Mode for written output files.
pub const OUTPUT_MODE: u32 = 0o600;

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn build_tera(path: &Path) -> Result<(Tera, String), RenderError> {
    let body = std::fs::read_to_string(path).map_err(|source| RenderError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })?;
    let name = template_name(path);

    let mut tera = Tera::default();
    // Output is plain text, whatever the template's extension.
    tera.autoescape_on(vec![]);
    tera.add_raw_template(&name, &body)
        .map_err(|source| RenderError::TemplateParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok((tera, name))
}

fn write_output(path: &Path, content: &[u8]) -> Result<(), RenderError> {
    let io_err = |source| RenderError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut file = open_output(path).map_err(io_err)?;
    file.write_all(content).map_err(io_err)?;
    file.flush().map_err(io_err)
}

#[cfg(unix)]
fn open_output(path: &Path) -> std::io::Result<std::fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(OUTPUT_MODE)
        .open(path)
}
#[cfg(not(unix))]
fn open_output(path: &Path) -> std::io::Result<std::fs::File> {
    std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders template files from disk.
///
/// Holds no state; each call reads its template fresh so edits between runs
/// are always picked up.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    /// Render `template_path` against `ctx` without writing anything.
    pub fn render_to_string(
        &self,
        template_path: &Path,
        ctx: &RenderContext,
    ) -> Result<String, RenderError> {
        let (tera, name) = build_tera(template_path)?;
        tera.render(&name, &ctx.to_tera_context())
            .map_err(|source| RenderError::TemplateExecution {
                path: template_path.to_path_buf(),
                source,
            })
    }

    /// Render `template_path` and write the result to `output_path`,
    /// overwriting any existing file without confirmation.
    pub fn render(
        &self,
        template_path: &Path,
        output_path: &Path,
        ctx: &RenderContext,
    ) -> Result<PathBuf, RenderError> {
        let content = self.render_to_string(template_path, ctx)?;
        write_output(output_path, content.as_bytes())?;
        tracing::info!("wrote: {}", output_path.display());
        Ok(output_path.to_path_buf())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
