//! Scaffolding for new C projects and shell scripts
//!
//! The core is two operations:
//! - [`tree::PathBuilder::ensure_directory_chain`] creates every missing
//!   directory along a relative path below a fixed root
//! - [`emit::Batch::emit`] expands a printf-style template and writes it
//!   to a file, creating parent directories first and reporting progress
//!
//! [`scaffold`] builds whole projects on top of them.

pub mod config;
pub mod emit;
pub mod environment;
pub mod error;
pub mod git;
pub mod licence;
pub mod manifest;
pub mod paths;
pub mod progress;
pub mod scaffold;
pub mod template;
pub mod tree;

// Re-export commonly used types
pub use emit::{Batch, Written};
pub use environment::Environment;
pub use error::{Phase, ScaffoldError};
pub use manifest::{Extra, Licence, Library, Manifest, Style};
pub use progress::{ProgressObserver, Quiet, StderrProgress};
pub use template::{Arg, TemplateError, Value};
pub use tree::{DirectoryCreation, PathBuilder, RelativePath};
