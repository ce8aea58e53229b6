//! Create a new project
//!
//! # Process
//!
//! 1. **Settings**: merge command-line flags over `~/.yait/config.toml`
//! 2. **Generation**: write every file of the selected style
//! 3. **Collaborators**: `git init`, library submodules, then the editor
//!
//! Collaborators run only after every file was written. A missing or
//! failing tool is reported as a warning and does not fail the command.

mod internal;

use anyhow::Result;

use yait::{Extra, Library, Licence, Style};

/// Command-line settings for `yait new`
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
    pub name: String,
    pub licence: Option<Licence>,
    pub style: Option<Style>,
    pub libraries: Vec<Library>,
    pub extras: Vec<Extra>,
    pub cpp: bool,
    pub author: Option<String>,
    pub no_git: bool,
    pub no_clang_format: bool,
    pub editor: bool,
    pub quiet: bool,
    pub force: bool,
}

/// Execute the new command in the current directory
pub fn execute(options: NewOptions) -> Result<()> {
    internal::execute_new(options)
}
