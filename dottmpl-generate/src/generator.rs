//! Generation orchestration.
//!
//! ## `Generator::generate` — run order
//!
//! 1. Fail with `NotARepository` unless the working directory is in a work
//!    tree. Nothing else is consulted first.
//! 2. Resolve the work-tree root and check it is an accessible directory.
//! 3. Read `(owner, repo)` from `origin` once for the whole batch.
//! 4. Locate the config (explicit path, else the XDG/HOME default) and load
//!    it once.
//! 5. For each name, in order: look it up, tilde-expand its template path,
//!    render to its output path. Output paths are never tilde-expanded.
//! 6. Stop at the first error. Files written earlier in the batch stay.
//!
//! Relative template and output paths are joined onto the work-tree root;
//! the process working directory is never changed.

use std::path::{Path, PathBuf};

use dottmpl_core::{
    config_path, load_config, AccountLookup, PathResolver, SystemAccounts, TemplateEntry, TemplateName,
    TemplateRegistry,
};
use dottmpl_git::{GitRunner, RepoLocator, SystemGit};
use dottmpl_renderer::{RenderContext, Renderer};

use crate::error::GenerateError;

// ---------------------------------------------------------------------------
// Result record
// ---------------------------------------------------------------------------

/// One successfully rendered template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: TemplateName,
    /// Template actually read, after expansion and root joining.
    pub template: PathBuf,
    /// File written.
    pub output: PathBuf,
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Runs the generation pipeline for one working directory.
pub struct Generator<G = SystemGit, A = SystemAccounts> {
    locator: RepoLocator<G>,
    resolver: PathResolver<A>,
    /// `None` means the default location, resolved only once it is needed.
    config_path: Option<PathBuf>,
    renderer: Renderer,
}

impl Generator<SystemGit, SystemAccounts> {
    /// Generator for the process's current directory, using the system git
    /// binary, `$HOME`, and the system account database.
    ///
    /// A relative `config_path` is taken relative to the current directory.
    /// An unreadable current directory surfaces later as `NotARepository`,
    /// since git cannot run there either.
    pub fn from_env(config_path: Option<&Path>) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let config_path = config_path.map(|p| cwd.join(p));
        Generator::new(RepoLocator::system(cwd), PathResolver::from_env(), config_path)
    }
}

impl<G: GitRunner, A: AccountLookup> Generator<G, A> {
    pub fn new(
        locator: RepoLocator<G>,
        resolver: PathResolver<A>,
        config_path: Option<PathBuf>,
    ) -> Self {
        Generator {
            locator,
            resolver,
            config_path,
            renderer: Renderer::new(),
        }
    }

    /// Render every template in `names`, in order, failing fast.
    pub fn generate<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<GeneratedFile>, GenerateError> {
        if !self.locator.is_repository() {
            return Err(GenerateError::NotARepository);
        }

        let root = self.locator.root()?;
        check_root(&root)?;
        tracing::debug!("repository root: {}", root.display());

        let identity = self.locator.owner_and_repo()?;
        tracing::debug!("repository identity: {identity}");

        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => config_path()?,
        };
        tracing::debug!("using config {}", path.display());
        let registry = TemplateRegistry::from_config(load_config(&path)?);
        let ctx = RenderContext::from(&identity);

        let mut generated = Vec::with_capacity(names.len());
        for name in names {
            let entry = registry.lookup(name.as_ref())?;
            generated.push(self.process_template(&root, entry, &ctx)?);
        }
        Ok(generated)
    }

    fn process_template(
        &self,
        root: &Path,
        entry: &TemplateEntry,
        ctx: &RenderContext,
    ) -> Result<GeneratedFile, GenerateError> {
        let template = root.join(self.resolver.expand(&entry.template_file)?);
        let output = root.join(&entry.output_file);
        tracing::debug!(
            "{}: {} -> {}",
            entry.name,
            template.display(),
            output.display()
        );
        self.renderer.render(&template, &output, ctx)?;
        Ok(GeneratedFile {
            name: entry.name.clone(),
            template,
            output,
        })
    }
}

fn check_root(root: &Path) -> Result<(), GenerateError> {
    let chdir_err = |source| GenerateError::Chdir {
        path: root.to_path_buf(),
        source,
    };
    let meta = std::fs::metadata(root).map_err(chdir_err)?;
    if !meta.is_dir() {
        return Err(chdir_err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "not a directory",
        )));
    }
    // Entering a directory needs search permission.
    std::fs::read_dir(root).map_err(chdir_err)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
