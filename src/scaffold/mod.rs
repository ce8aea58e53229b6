//! Project skeleton generation
//!
//! Turns a [`Manifest`] into an ordered list of artifacts and writes
//! them through one [`crate::emit::Batch`], aborting on the first
//! failure. Partially generated trees are left in place; running again
//! is safe because directory creation is idempotent and files are
//! overwritten.
//!
//! # Example
//!
//! ```no_run
//! use yait::manifest::Manifest;
//! use yait::progress::StderrProgress;
//! use yait::scaffold;
//!
//! let manifest = Manifest::new("hello", "Jane Doe");
//! let report = scaffold::create_project(&manifest, std::path::Path::new("."), StderrProgress)?;
//! println!("{} files in {}", report.files, report.root.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

mod contents;
mod internal;

use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::manifest::Manifest;
use crate::progress::ProgressObserver;
use crate::template::Value;

/// One file to generate
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Path relative to the project root
    pub path: String,
    pub template: &'static str,
    pub args: Vec<Value>,
    /// Mark 0755 after writing
    pub executable: bool,
}

/// Artifacts in emission order plus the file to open in an editor
#[derive(Debug, Clone)]
pub struct Plan {
    pub artifacts: Vec<Artifact>,
    pub main_source: String,
}

/// Outcome of a successful generation
#[derive(Debug, Clone)]
pub struct Report {
    pub root: PathBuf,
    pub files: usize,
    pub executables: usize,
    pub main_source: PathBuf,
}

/// Build the artifact list for `manifest` without touching the filesystem
pub fn plan(manifest: &Manifest, today: NaiveDate) -> Plan {
    internal::plan(manifest, today)
}

/// Directory the project's files are written to
pub fn project_root(manifest: &Manifest, parent: &Path) -> PathBuf {
    internal::project_root(manifest, parent)
}

/// Generate the project described by `manifest` below `parent`
///
/// # Errors
///
/// Returns an error if:
/// - The project name is not a single safe path segment
/// - The target exists and is not empty, unless `force` is set
/// - Any directory or file cannot be written (the underlying
///   [`crate::ScaffoldError`] is kept in the error chain)
pub fn create_project<O: ProgressObserver>(manifest: &Manifest, parent: &Path, observer: O) -> Result<Report> {
    let today = chrono::Local::now().date_naive();
    internal::create_project(manifest, parent, observer, today)
}

/// [`create_project`] with a fixed date, for reproducible output
pub fn create_project_on<O: ProgressObserver>(
    manifest: &Manifest,
    parent: &Path,
    observer: O,
    today: NaiveDate,
) -> Result<Report> {
    internal::create_project(manifest, parent, observer, today)
}
