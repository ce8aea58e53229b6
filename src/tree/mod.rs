//! Directory chains under a fixed project root (`mkdir -p`)
//!
//! Paths are always composed against the root held by [`PathBuilder`];
//! the process working directory is never changed.
//!
//! # Example
//!
//! ```no_run
//! use yait::tree::{DirectoryCreation, PathBuilder};
//!
//! let builder = PathBuilder::new("/tmp/demo");
//! match builder.ensure_directory_chain("man/man1")? {
//!     DirectoryCreation::Created(path) => println!("created {}", path.display()),
//!     DirectoryCreation::AlreadyExisted(_) => println!("nothing to do"),
//! }
//! # Ok::<(), yait::ScaffoldError>(())
//! ```

mod internal;

use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

pub use internal::RelativePath;

/// Successful outcome of [`PathBuilder::ensure_directory_chain`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCreation {
    /// At least one directory of the chain was created by this call
    Created(PathBuf),
    /// Every directory of the chain was already there
    AlreadyExisted(PathBuf),
}

impl DirectoryCreation {
    pub fn path(&self) -> &Path {
        match self {
            DirectoryCreation::Created(path) | DirectoryCreation::AlreadyExisted(path) => path,
        }
    }
}

/// Creates directory chains relative to one root
#[derive(Debug, Clone)]
pub struct PathBuilder {
    root: PathBuf,
}

impl PathBuilder {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensure every prefix directory of `path` exists under the root.
    ///
    /// Prefixes are created shortest first with mode 0755. Existing
    /// directories are accepted; anything else at a prefix aborts the
    /// call. Directories created before the failure stay in place.
    pub fn ensure_directory_chain(&self, path: &str) -> Result<DirectoryCreation, ScaffoldError> {
        let relative = RelativePath::parse(path)?;
        self.ensure_chain(&relative)
    }

    /// [`PathBuilder::ensure_directory_chain`] for an already parsed path
    pub fn ensure_chain(&self, path: &RelativePath) -> Result<DirectoryCreation, ScaffoldError> {
        internal::create_chain(&self.root, path)
    }

    /// Resolve an already validated relative path against the root
    pub fn resolve(&self, path: &RelativePath) -> PathBuf {
        path.resolve(&self.root)
    }
}

/// Ensure `path` exists relative to the current directory
pub fn ensure_directory_chain(path: &str) -> Result<DirectoryCreation, ScaffoldError> {
    PathBuilder::new(".").ensure_directory_chain(path)
}
