//! # dottmpl-generate
//!
//! The generation pipeline: locate the repository, read its `origin`
//! identity once, then render each requested template in order, stopping at
//! the first failure.
//!
//! Use [`Generator::from_env`] for the real git binary, `$HOME` and system
//! accounts, or [`Generator::new`] to inject fakes.

pub mod error;
pub mod generator;

pub use error::{ErrorKind, GenerateError};
pub use generator::{GeneratedFile, Generator};
