//! # dottmpl-renderer
//!
//! Tera-based renderer that turns one template file plus a repository's
//! `owner` / `repo` into an output file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use dottmpl_renderer::{RenderContext, Renderer};
//!
//! let ctx = RenderContext::new("octocat", "hello-world");
//! Renderer::new()
//!     .render(Path::new("badge.md.tera"), Path::new("BADGE.md"), &ctx)
//!     .expect("render");
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::RenderContext;
pub use engine::Renderer;
pub use error::RenderError;
