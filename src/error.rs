//! Error taxonomy for directory creation and file emission
//!
//! Every failure names the path that broke and keeps the OS error (or
//! template error) as its source, so `{:#}` prints the whole chain.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::template::TemplateError;

/// Phase of a single `emit` call in which a failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    DirectoryCreation,
    FormatExpansion,
    FileOpen,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::DirectoryCreation => "directory creation",
            Phase::FormatExpansion => "format expansion",
            Phase::FileOpen => "file open",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid path `{path}`: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("cannot create directory `{}`", segment.display())]
    DirectoryCreationFailed {
        segment: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open `{}` for writing", path.display())]
    FileOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write `{}`", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("template for `{}` does not match its arguments", path.display())]
    FormatMismatch {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },
}

impl ScaffoldError {
    pub(crate) fn invalid(path: &str, reason: &'static str) -> Self {
        ScaffoldError::InvalidPath {
            path: path.to_string(),
            reason,
        }
    }

    /// Phase the failure belongs to.
    ///
    /// A rejected path never reaches the filesystem, so it is reported
    /// with the directory phase. Write errors fold into `FileOpen`.
    pub fn phase(&self) -> Phase {
        match self {
            ScaffoldError::InvalidPath { .. } => Phase::DirectoryCreation,
            ScaffoldError::DirectoryCreationFailed { .. } => Phase::DirectoryCreation,
            ScaffoldError::FormatMismatch { .. } => Phase::FormatExpansion,
            ScaffoldError::FileOpenFailed { .. } | ScaffoldError::WriteFailed { .. } => {
                Phase::FileOpen
            }
        }
    }

    /// Raw OS error code, when the failure came from the OS
    pub fn os_error(&self) -> Option<i32> {
        match self {
            ScaffoldError::DirectoryCreationFailed { source, .. }
            | ScaffoldError::FileOpenFailed { source, .. }
            | ScaffoldError::WriteFailed { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}
