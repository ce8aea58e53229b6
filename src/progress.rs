//! Progress reporting for file emission

use std::io::Write;

/// Receives one notification per successfully written file
pub trait ProgressObserver {
    /// `count` is the number of files written so far in the batch.
    fn file_written(&mut self, count: usize, is_last: bool);
}

/// Renders `Created files N` on stderr, overwriting the line until the last file
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrProgress;

impl ProgressObserver for StderrProgress {
    fn file_written(&mut self, count: usize, is_last: bool) {
        let mut stderr = std::io::stderr().lock();
        // best effort: progress output must never fail a write
        let _ = if is_last {
            writeln!(stderr, "Created files {count}, done.")
        } else {
            write!(stderr, "Created files {count}\r")
        };
        let _ = stderr.flush();
    }
}

/// Discards all progress
#[derive(Debug, Default, Clone, Copy)]
pub struct Quiet;

impl ProgressObserver for Quiet {
    fn file_written(&mut self, _count: usize, _is_last: bool) {}
}

impl<O: ProgressObserver + ?Sized> ProgressObserver for Box<O> {
    fn file_written(&mut self, count: usize, is_last: bool) {
        (**self).file_written(count, is_last);
    }
}
