//! Template emission: one expanded template per file
//!
//! A [`Batch`] is one scaffold-generation run. It owns the project
//! root, the running count of written files and the progress observer,
//! so nothing about a run lives in process-wide state.
//!
//! # Example
//!
//! ```no_run
//! use yait::emit::Batch;
//! use yait::progress::StderrProgress;
//! use yait::template::Arg;
//!
//! let mut batch = Batch::new("/tmp/demo", StderrProgress);
//! batch.emit("README", "%s\n", &[Arg::from("demo")])?;
//! batch.emit_last("src/main.c", "int main(void) { return 0; }\n", &[])?;
//! # Ok::<(), yait::ScaffoldError>(())
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ScaffoldError;
use crate::progress::ProgressObserver;
use crate::template::{self, Arg};
use crate::tree::{PathBuilder, RelativePath};

/// Successful emission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Written {
    /// Bytes of expanded content now in the file
    pub length: usize,
}

/// One scaffold-generation run rooted at a fixed directory
pub struct Batch<O: ProgressObserver> {
    builder: PathBuilder,
    written: usize,
    observer: O,
}

impl<O: ProgressObserver> Batch<O> {
    pub fn new(root: impl AsRef<Path>, observer: O) -> Self {
        Self {
            builder: PathBuilder::new(root),
            written: 0,
            observer,
        }
    }

    pub fn root(&self) -> &Path {
        self.builder.root()
    }

    /// Files written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Write `template` expanded with `args` to `path`, creating parent directories.
    ///
    /// Existing files are truncated and overwritten.
    pub fn emit(&mut self, path: &str, template: &str, args: &[Arg<'_>]) -> Result<Written, ScaffoldError> {
        self.emit_file(path, template, args, false)
    }

    /// Same as [`Batch::emit`], telling the observer this is the batch's last file
    pub fn emit_last(&mut self, path: &str, template: &str, args: &[Arg<'_>]) -> Result<Written, ScaffoldError> {
        self.emit_file(path, template, args, true)
    }

    fn emit_file(
        &mut self,
        path: &str,
        template: &str,
        args: &[Arg<'_>],
        is_last: bool,
    ) -> Result<Written, ScaffoldError> {
        let relative = RelativePath::parse(path)?;
        if let Some(parent) = relative.parent() {
            self.builder.ensure_chain(&parent)?;
        }

        let target = self.builder.resolve(&relative);

        // expand before opening so a bad template leaves any old file intact
        let content = template::expand(template, args).map_err(|source| {
            ScaffoldError::FormatMismatch {
                path: target.clone(),
                source,
            }
        })?;

        write_content(&target, content.as_bytes())?;
        tracing::debug!(path = %target.display(), bytes = content.len(), "wrote file");

        self.written += 1;
        self.observer.file_written(self.written, is_last);

        Ok(Written {
            length: content.len(),
        })
    }
}

// Written in place: a failure after create leaves a truncated file behind.
fn write_content(target: &Path, content: &[u8]) -> Result<(), ScaffoldError> {
    let mut file = File::create(target).map_err(|source| ScaffoldError::FileOpenFailed {
        path: target.to_path_buf(),
        source,
    })?;

    file.write_all(content)
        .and_then(|()| file.flush())
        .map_err(|source| ScaffoldError::WriteFailed {
            path: target.to_path_buf(),
            source,
        })
}
