//! Per-invocation context and package-root detection

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{Error, Result};

/// Marker file written by the addon templates into every package root
const PACKAGE_MARKER: &str = "bobtemplate.cfg";

/// Ephemeral state for one CLI invocation
///
/// Created once at dispatch start, discarded at process exit. Holds no
/// persistent state.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// Root of the enclosing Plone package, if the CLI runs inside one
    pub target_dir: Option<Utf8PathBuf>,
    /// Verbosity counter from the command line
    pub verbose: u8,
}

impl InvocationContext {
    /// Build the context by probing the current working directory
    pub fn detect(verbose: u8) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let cwd = Utf8PathBuf::from_path_buf(cwd)
            .map_err(|p| std::io::Error::other(format!("non-UTF-8 working directory: {}", p.display())))?;
        Ok(Self {
            target_dir: find_package_root(&cwd),
            verbose,
        })
    }

    /// Build a context with an explicit target directory (used in tests)
    pub fn with_target_dir(target_dir: Option<Utf8PathBuf>) -> Self {
        Self {
            target_dir,
            verbose: 0,
        }
    }

    /// The package root, or a `NotInPackage` error naming `command`
    pub fn require_target_dir(&self, command: &str) -> Result<&Utf8Path> {
        self.target_dir
            .as_deref()
            .ok_or_else(|| Error::not_in_package(command))
    }

    /// Whether commands should echo their invocation before running it
    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }
}

/// Find the enclosing package root by walking `start` and its ancestors
/// looking for the package marker file
pub fn find_package_root(start: &Utf8Path) -> Option<Utf8PathBuf> {
    let mut current = start;
    loop {
        if current.join(PACKAGE_MARKER).is_file() {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}
