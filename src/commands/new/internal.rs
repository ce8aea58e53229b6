//! Internal implementation for the new command

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use yait::config::Config;
use yait::environment::Environment;
use yait::manifest::{validate_project_name, Flags, Manifest, Style};
use yait::progress::{ProgressObserver, Quiet, StderrProgress};
use yait::scaffold::{self, Report};
use yait::{git, Extra, Library};

use super::NewOptions;

/// Where a project goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub project: String,
    pub parent: PathBuf,
    pub in_place: bool,
}

/// Main execution logic for the new command
pub fn execute_new(options: NewOptions) -> Result<()> {
    let config = Config::load()?;
    let cwd = env::current_dir().context("Failed to determine current directory")?;

    let (manifest, report) = generate(&options, &config, &cwd)?;

    let environment = Environment::detect();
    run_collaborators(&manifest, &report, &environment);

    println!(
        "{} {} at {}",
        "Created".green().bold(),
        manifest.project,
        report.root.display()
    );
    Ok(())
}

/// Resolve settings and write every file below `cwd`
pub fn generate(options: &NewOptions, config: &Config, cwd: &Path) -> Result<(Manifest, Report)> {
    let target = resolve_target(&options.name, cwd)?;
    let manifest = build_manifest(options, config, target.project, target.in_place);

    let observer: Box<dyn ProgressObserver> = if options.quiet {
        Box::new(Quiet)
    } else {
        Box::new(StderrProgress)
    };
    let report = scaffold::create_project(&manifest, &target.parent, observer)
        .with_context(|| format!("Failed to create {}", manifest.project))?;
    Ok((manifest, report))
}

// =============================================================================
// Settings
// =============================================================================

/// `"."` means the current directory, named after itself
pub fn resolve_target(name: &str, cwd: &Path) -> Result<Target> {
    if name == "." {
        let project = cwd
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("Cannot derive a project name from {}", cwd.display()))?;
        validate_project_name(&project)
            .with_context(|| format!("Directory name of {} is not a valid project name", cwd.display()))?;
        return Ok(Target {
            project,
            parent: cwd.to_path_buf(),
            in_place: true,
        });
    }

    if name.contains('/') {
        bail!("project name `{name}` must be a single directory name");
    }
    validate_project_name(name)?;
    Ok(Target {
        project: name.to_string(),
        parent: cwd.to_path_buf(),
        in_place: false,
    })
}

/// Flags override config, config overrides built-in defaults
pub fn build_manifest(options: &NewOptions, config: &Config, project: String, in_place: bool) -> Manifest {
    let defaults = Flags::default();
    let author = resolve_author(options.author.as_deref(), config);

    let libraries: Vec<Library> = dedup(if options.libraries.is_empty() {
        &config.libraries
    } else {
        &options.libraries
    });
    let extras: Vec<Extra> = dedup(if options.extras.is_empty() {
        &config.extras
    } else {
        &options.extras
    });

    let mut manifest = Manifest::new(project, author);
    manifest.licence = options.licence.or(config.licence).unwrap_or_default();
    manifest.style = options.style.or(config.style).unwrap_or_default();
    manifest.libraries = libraries;
    manifest.extras = extras;
    manifest.in_place = in_place;
    manifest.flags = Flags {
        git: !options.no_git && config.git.unwrap_or(defaults.git),
        clang_format: !options.no_clang_format && config.clang_format.unwrap_or(defaults.clang_format),
        cpp: options.cpp || config.cpp.unwrap_or(defaults.cpp),
        editor: options.editor,
        force: options.force,
        quiet: options.quiet,
    };
    manifest
}

/// First occurrence wins, order kept
fn dedup<T: Copy + PartialEq>(items: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(*item);
        }
    }
    out
}

fn resolve_author(flag: Option<&str>, config: &Config) -> String {
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };

    flag.and_then(non_empty)
        .or_else(|| config.author.as_deref().and_then(non_empty))
        .or_else(git::config_user_name)
        .or_else(|| env::var("USER").ok().as_deref().and_then(non_empty))
        .or_else(|| env::var("LOGNAME").ok().as_deref().and_then(non_empty))
        .unwrap_or_else(|| "author".to_string())
}

// =============================================================================
// Collaborators
// =============================================================================

fn warn(message: &str) {
    tracing::debug!("{message}");
    eprintln!("{} {message}", "warning:".yellow().bold());
}

/// `git init`, submodules, editor; failures are warnings
fn run_collaborators(manifest: &Manifest, report: &Report, environment: &Environment) {
    // A lone script is written into an existing directory; leave its repository alone
    let wants_repo = manifest.style != Style::Shell;

    let mut repo_ready = false;
    if manifest.flags.git && wants_repo {
        if environment.has_git() {
            match ensure_repo(&report.root) {
                Ok(_) => repo_ready = true,
                Err(e) => warn(&format!("{e:#}")),
            }
        } else {
            warn("git not found, skipping repository initialization");
        }
    }

    if !manifest.libraries.is_empty() && wants_repo {
        if repo_ready {
            for library in &manifest.libraries {
                if let Err(e) = git::submodule_add(&report.root, library.url()) {
                    warn(&format!("{library}: {e:#}"));
                }
            }
        } else {
            warn("no git repository, skipping library submodules");
        }
    }

    if manifest.flags.editor {
        if environment.has_editor() {
            if let Err(e) = open_editor(environment, report) {
                warn(&format!("{e:#}"));
            }
        } else {
            warn(&format!("editor `{}` not found", environment.editor));
        }
    }
}

/// Initialize `root` unless it already is a repository's top level
///
/// Returns whether a new repository was created.
fn ensure_repo(root: &Path) -> Result<bool> {
    if git::is_repo_root(root)? {
        tracing::debug!(root = %root.display(), "already a git repository");
        return Ok(false);
    }
    git::init(root)?;
    Ok(true)
}

fn open_editor(environment: &Environment, report: &Report) -> Result<()> {
    let mut parts = environment.editor.split_whitespace();
    let program = parts.next().unwrap_or("vi");
    let executable = environment.tool_path(program).unwrap_or(Path::new(program));

    let status = Command::new(executable)
        .args(parts)
        .arg(&report.main_source)
        .current_dir(&report.root)
        .status()
        .with_context(|| format!("Failed to launch {program}"))?;

    if !status.success() {
        bail!("{program} exited with {status}");
    }
    Ok(())
}
