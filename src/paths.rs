//! Filesystem layout: where user config lives and where generated files go.
//!
//! No I/O here. Project paths are `/`-separated strings relative to the
//! project root, ready for [`crate::emit::Batch::emit`].
//!
//! # User Level (~/.yait/)
//!
//! ```text
//! ~/.yait/
//! └── config.toml              # Defaults for author, licence, style...
//! ```
//!
//! # Project Level
//!
//! ```text
//! project/
//! ├── COPYING
//! ├── README
//! ├── Makefile
//! ├── include/<name>.h
//! ├── src/main.c               # main.cpp with --cpp
//! ├── man/<name>.1
//! └── doc/WHATNEXT
//! ```

use std::path::PathBuf;

// =============================================================================
// User Level (~/.yait/)
// =============================================================================

/// User's yait home directory: `~/.yait/`
pub fn yait_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".yait")
}

/// User config file: `~/.yait/config.toml`
pub fn config_path() -> PathBuf {
    yait_home().join("config.toml")
}

// =============================================================================
// Project Level (relative to the project root)
// =============================================================================

/// Project-relative paths that depend on the project name
pub mod project {
    pub const COPYING: &str = "COPYING";
    pub const README: &str = "README";
    pub const MAKEFILE: &str = "Makefile";
    pub const CONFIGURE: &str = "configure";
    pub const CLANG_FORMAT: &str = ".clang-format";
    pub const CMAKE_LISTS: &str = "CMakeLists.txt";
    pub const FORMAT_TOOL: &str = "tools/format";
    pub const CLEANUP_TOOL: &str = "tools/Cleanup";

    /// Program entry point: `src/main.<ext>`
    pub fn main_source(ext: &str) -> String {
        format!("src/main.{ext}")
    }

    /// Public header: `include/<name>.h`
    pub fn header(name: &str) -> String {
        format!("include/{name}.h")
    }

    /// Section 1 manual page: `man/<name>.1`
    pub fn man_page(name: &str) -> String {
        format!("man/{name}.1")
    }

    /// Library implementation: `src/<name>.<ext>`
    pub fn library_source(name: &str, ext: &str) -> String {
        format!("src/{name}.{ext}")
    }

    /// Single-file program: `<name>.<ext>`
    pub fn single_source(name: &str, ext: &str) -> String {
        format!("{name}.{ext}")
    }
}
