//! User defaults from `~/.yait/config.toml`
//!
//! ```toml
//! author = "Jane Doe"
//! licence = "mit"
//! style = "gnu"
//! git = false
//! clang_format = true
//! cpp = false
//! libraries = ["stb"]
//! extras = ["format"]
//! ```
//!
//! Every key is optional. Command-line flags win over these values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::manifest::{Extra, Library, Licence, Style};
use crate::paths;

/// Configuration for yait
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub author: Option<String>,
    pub licence: Option<Licence>,
    pub style: Option<Style>,
    pub git: Option<bool>,
    pub clang_format: Option<bool>,
    pub cpp: Option<bool>,
    pub libraries: Vec<Library>,
    pub extras: Vec<Extra>,
}

impl Config {
    /// Load from the user config path; a missing file is the default config
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}
