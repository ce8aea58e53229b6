//! What to generate: project name, author, licence, style, libraries and flags

use std::fmt;

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::Deserialize;

/// Licence written to `COPYING`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Licence {
    /// BSD 3-Clause
    #[default]
    Bsd,
    /// MIT
    Mit,
    /// GNU General Public Licence v3
    Gpl,
    /// Unlicense (public domain)
    #[value(alias = "unl")]
    #[serde(alias = "unl")]
    Unlicense,
}

/// Project layout and build system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Makefile, README and a single source file
    Simple,
    /// configure script, Makefile, src/, include/, man/ and doc/
    #[default]
    Posix,
    /// GNU distribution files with autotools input
    Gnu,
    /// Static and shared library
    Library,
    /// CMakeLists.txt with a single executable target
    Cmake,
    /// flat-assembler style tree with a build script
    Fasm,
    /// One executable shell script, no directory
    Shell,
}

/// Third-party library pulled in as a git submodule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    #[value(alias = "ncurse")]
    Ncurses,
    Raylib,
    Stb,
    Uthash,
    Linenoise,
}

impl Library {
    pub fn url(self) -> &'static str {
        match self {
            Library::Ncurses => "https://github.com/mirror/ncurses",
            Library::Raylib => "https://github.com/raysan5/raylib",
            Library::Stb => "https://github.com/nothings/stb",
            Library::Uthash => "https://github.com/troydhanson/uthash",
            Library::Linenoise => "https://github.com/antirez/linenoise",
        }
    }
}

/// Helper script written under `tools/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Extra {
    /// tools/format: run clang-format over every source file
    Format,
    /// tools/Cleanup: format, then remove build leftovers
    #[value(alias = "Cleanup")]
    #[serde(alias = "Cleanup")]
    Cleanup,
}

fn value_name<T: ValueEnum>(value: &T) -> String {
    value
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}

impl fmt::Display for Licence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&value_name(self))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&value_name(self))
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&value_name(self))
    }
}

impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&value_name(self))
    }
}

/// On/off switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    /// Run `git init` after generation
    pub git: bool,
    /// Write `.clang-format`
    pub clang_format: bool,
    /// C++ sources and compiler candidates instead of C
    pub cpp: bool,
    /// Open the main source in `$EDITOR` afterwards
    pub editor: bool,
    /// Overwrite an existing, non-empty target
    pub force: bool,
    /// Suppress progress output
    pub quiet: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            git: true,
            clang_format: true,
            cpp: false,
            editor: false,
            force: false,
            quiet: false,
        }
    }
}

/// Everything the scaffold planner needs
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Project name, used for the directory and several file names
    pub project: String,
    pub author: String,
    pub licence: Licence,
    pub style: Style,
    pub libraries: Vec<Library>,
    pub extras: Vec<Extra>,
    pub flags: Flags,
    /// Generate into the parent directory itself instead of `<parent>/<project>`
    pub in_place: bool,
}

impl Manifest {
    pub fn new(project: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            author: author.into(),
            licence: Licence::default(),
            style: Style::default(),
            libraries: Vec::new(),
            extras: Vec::new(),
            flags: Flags::default(),
            in_place: false,
        }
    }

    /// Project name in upper case with non-alphanumerics as `_`
    pub fn upper_name(&self) -> String {
        self.project
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}

/// Check a project name is usable as one path segment and in file names
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("project name is empty");
    }
    if name == "." || name == ".." {
        bail!("`{name}` is not a project name");
    }
    if name.starts_with('-') {
        bail!("project name `{name}` must not start with `-`");
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        bail!("project name `{name}` contains `{bad}` (allowed: letters, digits, `-`, `_`, `.`)");
    }
    Ok(())
}
