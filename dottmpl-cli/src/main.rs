//! gh-dot-tmpl — render per-repository files from personal templates.
//!
//! # Usage
//!
//! ```text
//! gh-dot-tmpl [--config <PATH>] <template_name>...
//! gh-dot-tmpl -h | --help
//! gh-dot-tmpl -v | --version
//! ```
//!
//! Templates are declared in `$XDG_CONFIG_HOME/gh-dot-tmpl/config.yaml`
//! (or `~/.config/gh-dot-tmpl/config.yaml`):
//!
//! ```yaml
//! templates:
//!   issue:
//!     template_file: ~/templates/issue.md
//!     output_file: .github/ISSUE_TEMPLATE/bug.md
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use dottmpl_generate::{GeneratedFile, Generator};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "gh-dot-tmpl",
    about = "Generate repository files from templates filled with the GitHub owner and repo",
    long_about = None,
    disable_version_flag = true,
)]
struct Cli {
    /// Show version.
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Config file to read instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Names of the templates to process, in order.
    #[arg(value_name = "TEMPLATE_NAME")]
    templates: Vec<String>,
}

impl Cli {
    fn run(self) -> Result<()> {
        tracing::debug!("templates requested: {:?}", self.templates);
        let generated =
            Generator::from_env(self.config.as_deref()).generate(self.templates.as_slice())?;
        print_results(&generated);
        Ok(())
    }
}

fn print_results(generated: &[GeneratedFile]) {
    for file in generated {
        println!("{} {} → {}", "✓".green(), file.name, file.output.display());
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    if cli.version {
        println!("gh-dot-tmpl version {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    if cli.templates.is_empty() {
        eprintln!("Error: No template names provided");
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    }

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_templates_in_order() {
        let cli = Cli::try_parse_from(["gh-dot-tmpl", "template1", "template2"]).unwrap();
        assert_eq!(cli.templates, vec!["template1", "template2"]);
        assert!(!cli.version);
        assert!(cli.config.is_none());
    }

    #[test]
    fn short_and_long_version_flags() {
        assert!(Cli::try_parse_from(["gh-dot-tmpl", "-v"]).unwrap().version);
        assert!(Cli::try_parse_from(["gh-dot-tmpl", "--version"]).unwrap().version);
    }

    #[test]
    fn config_override() {
        let cli = Cli::try_parse_from(["gh-dot-tmpl", "--config", "/tmp/c.yaml", "t"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.yaml")));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["gh-dot-tmpl", "--invalidflag"]).is_err());
    }
}
