//! Input locations and project-root discovery.
//!
//! The tool is usually run from the project root or from inside its `docs/`
//! folder, and sometimes as an installed binary. Roots are resolved from (in
//! order) an explicit value, `NAVSYNC_ROOT`, the executable's directory, the
//! working directory, and the build-time `NAVSYNC_ROOT_HINT`.

use crate::error::SyncError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Navigation config, relative to the project root.
pub const DEFAULT_DOCS_PATH: &str = "docs/docs.json";
/// OpenAPI document, relative to the project root.
pub const DEFAULT_OPENAPI_PATH: &str = "docs/deribit_openapi.json";

pub const ENV_ROOT: &str = "NAVSYNC_ROOT";

const DOCS_DIR_NAME: &str = "docs";

/// Where to read from and write to for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    pub docs_path: PathBuf,
    pub openapi_path: PathBuf,
    /// Compute and report updates without writing the navigation file.
    pub dry_run: bool,
}

impl SyncOptions {
    pub fn new(docs_path: impl Into<PathBuf>, openapi_path: impl Into<PathBuf>) -> Self {
        Self {
            docs_path: docs_path.into(),
            openapi_path: openapi_path.into(),
            dry_run: false,
        }
    }

    /// Default file locations under `root`.
    pub fn for_root(root: &Path) -> Self {
        Self::new(root.join(DEFAULT_DOCS_PATH), root.join(DEFAULT_OPENAPI_PATH))
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Options for a run once the command line has been parsed. Paths given
/// explicitly win over the defaults under the discovered root.
pub fn resolve_options(
    root: Option<&Path>,
    docs: Option<PathBuf>,
    openapi: Option<PathBuf>,
) -> Result<SyncOptions, SyncError> {
    let (docs_path, openapi_path) = match (docs, openapi) {
        (Some(docs), Some(openapi)) => (docs, openapi),
        (docs, openapi) => {
            let root = match root {
                Some(explicit) => explicit.to_path_buf(),
                None => find_project_root()?,
            };
            let defaults = SyncOptions::for_root(&root);
            (
                docs.unwrap_or(defaults.docs_path),
                openapi.unwrap_or(defaults.openapi_path),
            )
        }
    };
    Ok(SyncOptions::new(docs_path, openapi_path))
}

/// A place to look for the project root. Earlier sources win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSource {
    /// Must itself be the root, or the root's `docs/` folder.
    Exact(PathBuf),
    /// Searched from here up to the filesystem root.
    Within(PathBuf),
}

impl RootSource {
    pub fn resolve(&self) -> Option<PathBuf> {
        match self {
            RootSource::Exact(path) => normalize_root(&fs::canonicalize(path).ok()?),
            RootSource::Within(start) => search_upwards(start),
        }
    }
}

/// `NAVSYNC_ROOT`, the executable's directory, the working directory, then
/// the build-time hint.
pub fn default_root_sources() -> Vec<RootSource> {
    let env_root = env::var_os(ENV_ROOT)
        .filter(|value| !value.is_empty())
        .map(|value| RootSource::Exact(value.into()));
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| RootSource::Within(dir.to_path_buf())));
    let cwd = env::current_dir().ok().map(RootSource::Within);
    let build_hint = option_env!("NAVSYNC_ROOT_HINT")
        .filter(|hint| !hint.is_empty())
        .map(|hint| RootSource::Exact(hint.into()));

    [env_root, exe_dir, cwd, build_hint].into_iter().flatten().collect()
}

pub fn resolve_root(sources: &[RootSource]) -> Option<PathBuf> {
    sources.iter().find_map(|source| {
        let root = source.resolve();
        if root.is_none() {
            debug!(?source, "no project root");
        }
        root
    })
}

/// Locate the documentation project root.
pub fn find_project_root() -> Result<PathBuf, SyncError> {
    resolve_root(&default_root_sources()).ok_or(SyncError::RootNotFound)
}

/// A directory is a root when it holds the navigation config.
pub fn is_project_root(candidate: &Path) -> bool {
    candidate.join(DEFAULT_DOCS_PATH).is_file()
}

// A `docs` folder whose parent is a root resolves to that parent.
fn normalize_root(dir: &Path) -> Option<PathBuf> {
    let docs_parent = dir
        .file_name()
        .is_some_and(|name| name == DOCS_DIR_NAME)
        .then(|| dir.parent())
        .flatten();
    docs_parent
        .into_iter()
        .chain([dir])
        .find(|candidate| is_project_root(candidate))
        .map(Path::to_path_buf)
}

/// Walk from `start` to the filesystem root looking for a project root.
pub fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if let Some(root) = normalize_root(&dir) {
            return Some(root);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
