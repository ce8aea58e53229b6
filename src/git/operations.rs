//! Low-level git operations
//!
//! Every command runs with an explicit working directory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Check if `dir` is the top level of a git work tree
///
/// A directory nested inside some other repository does not count.
pub fn is_repo_root(dir: &Path) -> Result<bool> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(dir)
        .output()
        .context("Failed to check if directory is a git repository")?;

    if !output.status.success() {
        return Ok(false);
    }

    let toplevel = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
    let dir = dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", dir.display()))?;
    Ok(toplevel.canonicalize().is_ok_and(|top| top == dir))
}

/// Initialize a repository in `dir`
pub fn init(dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .args(["init", "--quiet"])
        .current_dir(dir)
        .output()
        .context("Failed to run git init")?;

    if !output.status.success() {
        anyhow::bail!(
            "git init failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(())
}

/// Add `url` as a submodule of the repository in `dir`
pub fn submodule_add(dir: &Path, url: &str) -> Result<()> {
    let output = Command::new("git")
        .args(["submodule", "add", "--quiet", url])
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to run git submodule add {url}"))?;

    if !output.status.success() {
        anyhow::bail!(
            "git submodule add {} failed: {}",
            url,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(())
}

/// `user.name` from git config, if set
pub fn config_user_name() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "user.name"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
