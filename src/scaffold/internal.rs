//! Internal implementation for the scaffold planner

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

use crate::emit::Batch;
use crate::licence;
use crate::manifest::{validate_project_name, Extra, Manifest, Style};
use crate::paths::project;
use crate::progress::ProgressObserver;
use crate::template::{Arg, Value};
use crate::tree::PathBuilder;

use super::contents;
use super::{Artifact, Plan, Report};

// =============================================================================
// Planning
// =============================================================================

fn artifact(path: impl Into<String>, template: &'static str, args: Vec<Value>) -> Artifact {
    Artifact {
        path: path.into(),
        template,
        args,
        executable: false,
    }
}

fn script(path: impl Into<String>, template: &'static str, args: Vec<Value>) -> Artifact {
    Artifact {
        executable: true,
        ..artifact(path, template, args)
    }
}

fn text(s: &str) -> Value {
    Value::from(s)
}

/// Language-dependent bits of the generated build files
struct Lang {
    ext: &'static str,
    compiler: &'static str,
    candidates: &'static str,
    cmake: &'static str,
    autoconf: &'static str,
}

const C: Lang = Lang {
    ext: "c",
    compiler: "cc",
    candidates: contents::CC_CANDIDATES,
    cmake: "C",
    autoconf: "AC_PROG_CC",
};

const CPP: Lang = Lang {
    ext: "cpp",
    compiler: "c++",
    candidates: contents::CXX_CANDIDATES,
    cmake: "CXX",
    autoconf: "AC_PROG_CXX",
};

pub fn plan(manifest: &Manifest, today: NaiveDate) -> Plan {
    let name = manifest.project.as_str();
    let author = manifest.author.as_str();
    let upper = manifest.upper_name();
    let date = today.format("%Y-%m-%d").to_string();
    let lang = if manifest.flags.cpp { &CPP } else { &C };
    let ext = lang.ext;

    let (mut artifacts, main_source) = match manifest.style {
        Style::Simple => (
            vec![
                artifact(
                    project::MAKEFILE,
                    contents::SIMPLE_MAKEFILE,
                    vec![text(name), text(ext), text(lang.compiler)],
                ),
                artifact(project::README, contents::README_SHORT, vec![text(name)]),
                artifact(project::single_source(name, ext), contents::MAIN_C, vec![text(name), text(author)]),
            ],
            project::single_source(name, ext),
        ),
        Style::Posix => (
            vec![
                artifact(project::MAKEFILE, contents::POSIX_MAKEFILE, vec![text(name), text(ext)]),
                script(project::CONFIGURE, contents::CONFIGURE, vec![text(lang.candidates)]),
                artifact(project::README, contents::README, vec![text(name)]),
                artifact(project::main_source(ext), contents::MAIN_C, vec![text(name), text(author)]),
                artifact(project::header(name), contents::HEADER_GUARD, vec![text(&format!("{upper}_H"))]),
                artifact(
                    project::man_page(name),
                    contents::MAN_PAGE,
                    vec![text(name), text(&upper), text(&date), text(author)],
                ),
                artifact("doc/WHATNEXT", contents::WHAT_NEXT, Vec::new()),
            ],
            project::main_source(ext),
        ),
        Style::Gnu => (
            vec![
                artifact("AUTHORS", contents::GNU_AUTHORS, vec![text(author)]),
                artifact("INSTALL", contents::GNU_INSTALL, Vec::new()),
                artifact("NEWS", contents::GNU_NEWS, vec![text(name)]),
                artifact(project::README, contents::GNU_README, vec![text(name)]),
                artifact(
                    "configure.ac",
                    contents::CONFIGURE_AC,
                    vec![text(name), text(author), text(lang.autoconf)],
                ),
                artifact(project::main_source(ext), contents::MAIN_C, vec![text(name), text(author)]),
                artifact(
                    project::man_page(name),
                    contents::MAN_PAGE,
                    vec![text(name), text(&upper), text(&date), text(author)],
                ),
            ],
            project::main_source(ext),
        ),
        Style::Library => (
            vec![
                artifact(project::header(name), contents::HEADER_GUARD, vec![text(&format!("{upper}_H"))]),
                artifact(project::library_source(name, ext), contents::LIBRARY_SOURCE, vec![text(name)]),
                artifact(
                    project::MAKEFILE,
                    contents::LIBRARY_MAKEFILE,
                    vec![text(name), text(ext), text(lang.compiler)],
                ),
                artifact(project::README, contents::README_SHORT, vec![text(name)]),
            ],
            project::library_source(name, ext),
        ),
        Style::Cmake => (
            vec![
                artifact(
                    project::CMAKE_LISTS,
                    contents::CMAKE_LISTS,
                    vec![text(name), text(lang.cmake), text(ext)],
                ),
                artifact(project::README, contents::README, vec![text(name)]),
                artifact(project::main_source(ext), contents::MAIN_C, vec![text(name), text(author)]),
            ],
            project::main_source(ext),
        ),
        Style::Fasm => (
            vec![
                artifact(format!("{upper}.TXT"), contents::FASM_TXT, Vec::new()),
                artifact(format!("SOURCE/main.{ext}"), contents::FASM_MAIN_C, Vec::new()),
                script(
                    "TOOLS/build.sh",
                    contents::FASM_BUILD,
                    vec![text(name), text(ext), text(lang.compiler)],
                ),
            ],
            format!("SOURCE/main.{ext}"),
        ),
        Style::Shell => (
            vec![script(
                name,
                contents::SHELL_SCRIPT,
                vec![Value::Int(i64::from(today.year())), text(author)],
            )],
            name.to_string(),
        ),
    };

    if manifest.style != Style::Shell {
        for extra in &manifest.extras {
            artifacts.push(match extra {
                Extra::Format => script(project::FORMAT_TOOL, contents::FORMAT_TOOL, vec![text(ext)]),
                Extra::Cleanup => script(project::CLEANUP_TOOL, contents::CLEANUP_TOOL, Vec::new()),
            });
        }
        if manifest.flags.clang_format {
            artifacts.push(artifact(project::CLANG_FORMAT, contents::CLANG_FORMAT, Vec::new()));
        }
        let (template, args) = licence::copying(manifest.licence, name, author, today.year());
        artifacts.push(artifact(project::COPYING, template, args));
    }

    Plan {
        artifacts,
        main_source,
    }
}

// =============================================================================
// Target directory
// =============================================================================

/// Where files of `manifest` land when generated below `parent`
pub fn project_root(manifest: &Manifest, parent: &Path) -> PathBuf {
    if manifest.in_place || manifest.style == Style::Shell {
        parent.to_path_buf()
    } else {
        parent.join(&manifest.project)
    }
}

/// Refuse to clobber existing work unless forced, then create the root
fn prepare_root(manifest: &Manifest, plan: &Plan, parent: &Path) -> Result<PathBuf> {
    let root = project_root(manifest, parent);
    let force = manifest.flags.force;

    if root.as_path() == parent {
        if !force {
            if let Some(existing) = plan
                .artifacts
                .iter()
                .find(|a| root.join(&a.path).exists())
            {
                bail!(
                    "`{}` already exists (use --force to overwrite)",
                    root.join(&existing.path).display()
                );
            }
        }
        return Ok(root);
    }

    if root.exists() {
        if !root.is_dir() {
            bail!("`{}` exists and is not a directory", root.display());
        }
        let has_entries = fs::read_dir(&root)
            .with_context(|| format!("Failed to read {}", root.display()))?
            .next()
            .is_some();
        if has_entries && !force {
            bail!(
                "`{}` already exists and is not empty (use --force to overwrite)",
                root.display()
            );
        }
    }

    PathBuilder::new(parent).ensure_directory_chain(&manifest.project)?;
    Ok(root)
}

// =============================================================================
// Generation
// =============================================================================

pub fn create_project<O: ProgressObserver>(
    manifest: &Manifest,
    parent: &Path,
    observer: O,
    today: NaiveDate,
) -> Result<Report> {
    validate_project_name(&manifest.project)?;

    let plan = plan(manifest, today);
    let root = prepare_root(manifest, &plan, parent)?;
    tracing::debug!(root = %root.display(), style = %manifest.style, "generating project");

    let mut batch = Batch::new(&root, observer);
    let last = plan.artifacts.len().saturating_sub(1);
    for (i, artifact) in plan.artifacts.iter().enumerate() {
        let args: Vec<Arg<'_>> = artifact.args.iter().map(Value::as_arg).collect();
        if i == last {
            batch.emit_last(&artifact.path, artifact.template, &args)?;
        } else {
            batch.emit(&artifact.path, artifact.template, &args)?;
        }
    }
    let files = batch.written();

    let executables: Vec<PathBuf> = plan
        .artifacts
        .iter()
        .filter(|a| a.executable)
        .map(|a| root.join(&a.path))
        .collect();
    if !executables.is_empty() {
        if !manifest.flags.quiet {
            eprint!("Changing permissions {}", executables.len());
        }
        for path in &executables {
            mark_executable(path)?;
        }
        if !manifest.flags.quiet {
            eprintln!(", done.");
        }
    }

    Ok(Report {
        main_source: root.join(&plan.main_source),
        root,
        files,
        executables: executables.len(),
    })
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .with_context(|| format!("Failed to make {} executable", path.display()))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn paths(plan: &Plan) -> Vec<&str> {
        plan.artifacts.iter().map(|a| a.path.as_str()).collect()
    }

    #[test]
    fn test_posix_plan() {
        let manifest = Manifest::new("demo", "Jane");
        let plan = plan(&manifest, day());

        assert_eq!(
            paths(&plan),
            [
                "Makefile",
                "configure",
                "README",
                "src/main.c",
                "include/demo.h",
                "man/demo.1",
                "doc/WHATNEXT",
                ".clang-format",
                "COPYING",
            ]
        );
        assert_eq!(plan.main_source, "src/main.c");
        let executables: Vec<_> = plan.artifacts.iter().filter(|a| a.executable).collect();
        assert_eq!(executables.len(), 1);
        assert_eq!(executables[0].path, "configure");
    }

    #[test]
    fn test_clang_format_flag() {
        let mut manifest = Manifest::new("demo", "Jane");
        manifest.flags.clang_format = false;
        let plan = plan(&manifest, day());
        assert!(!paths(&plan).contains(&".clang-format"));
    }

    #[test]
    fn test_shell_plan_is_one_script() {
        let mut manifest = Manifest::new("deploy", "Jane");
        manifest.style = Style::Shell;
        let plan = plan(&manifest, day());

        assert_eq!(paths(&plan), ["deploy"]);
        assert!(plan.artifacts[0].executable);
        assert_eq!(plan.artifacts[0].args[0], Value::Int(2025));
    }

    #[test]
    fn test_fasm_uses_upper_name() {
        let mut manifest = Manifest::new("demo", "Jane");
        manifest.style = Style::Fasm;
        let plan = plan(&manifest, day());
        assert_eq!(paths(&plan)[0], "DEMO.TXT");
        assert_eq!(plan.main_source, "SOURCE/main.c");
    }

    #[test]
    fn test_every_style_expands() {
        for style in [
            Style::Simple,
            Style::Posix,
            Style::Gnu,
            Style::Library,
            Style::Cmake,
            Style::Fasm,
            Style::Shell,
        ] {
            for cpp in [false, true] {
                let mut manifest = Manifest::new("demo", "Jane");
                manifest.style = style;
                manifest.flags.cpp = cpp;
                manifest.extras = vec![Extra::Format, Extra::Cleanup];
                for artifact in plan(&manifest, day()).artifacts {
                    let args: Vec<_> = artifact.args.iter().map(Value::as_arg).collect();
                    crate::template::expand(artifact.template, &args)
                        .unwrap_or_else(|e| panic!("{style} {}: {e}", artifact.path));
                }
            }
        }
    }

    #[test]
    fn test_cmake_plan() {
        let mut manifest = Manifest::new("demo", "Jane");
        manifest.style = Style::Cmake;
        let plan = plan(&manifest, day());

        assert_eq!(
            paths(&plan),
            ["CMakeLists.txt", "README", "src/main.c", ".clang-format", "COPYING"]
        );
        let args: Vec<_> = plan.artifacts[0].args.iter().map(Value::as_arg).collect();
        let lists = crate::template::expand(plan.artifacts[0].template, &args).unwrap();
        assert!(lists.contains("project(demo VERSION 0.1 LANGUAGES C)"));
        assert!(lists.contains("add_executable(demo src/main.c)"));
    }

    #[test]
    fn test_cpp_switches_sources_and_compilers() {
        let mut manifest = Manifest::new("demo", "Jane");
        manifest.flags.cpp = true;
        let plan = plan(&manifest, day());

        assert_eq!(plan.main_source, "src/main.cpp");
        assert!(paths(&plan).contains(&"src/main.cpp"));
        let configure = plan.artifacts.iter().find(|a| a.path == "configure").unwrap();
        assert_eq!(configure.args, vec![Value::from(contents::CXX_CANDIDATES)]);
    }

    #[test]
    fn test_extras_are_executable_tools() {
        let mut manifest = Manifest::new("demo", "Jane");
        manifest.extras = vec![Extra::Cleanup, Extra::Format];
        let plan = plan(&manifest, day());

        let tools: Vec<_> = plan
            .artifacts
            .iter()
            .filter(|a| a.path.starts_with("tools/"))
            .map(|a| (a.path.as_str(), a.executable))
            .collect();
        assert_eq!(tools, [("tools/Cleanup", true), ("tools/format", true)]);

        manifest.style = Style::Shell;
        assert_eq!(paths(&super::plan(&manifest, day())), ["demo"]);
    }

    #[test]
    fn test_project_root() {
        let parent = Path::new("/tmp/work");
        let mut manifest = Manifest::new("demo", "Jane");
        assert_eq!(project_root(&manifest, parent), parent.join("demo"));

        manifest.in_place = true;
        assert_eq!(project_root(&manifest, parent), parent);

        manifest.in_place = false;
        manifest.style = Style::Shell;
        assert_eq!(project_root(&manifest, parent), parent);
    }
}
