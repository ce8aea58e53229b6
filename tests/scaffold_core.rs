//! Directory chains and template emission against a real filesystem

use std::fs;

use tempfile::TempDir;
use yait::{Arg, Batch, DirectoryCreation, PathBuilder, Phase, ProgressObserver, Quiet, ScaffoldError, Written};

/// Keeps every notification for later inspection
#[derive(Default)]
struct Recorder {
    events: Vec<(usize, bool)>,
}

impl ProgressObserver for Recorder {
    fn file_written(&mut self, count: usize, is_last: bool) {
        self.events.push((count, is_last));
    }
}

fn entries(dir: &std::path::Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_directory_creation_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let builder = PathBuilder::new(temp.path());

    let first = builder.ensure_directory_chain("a/b/c").unwrap();
    assert!(matches!(first, DirectoryCreation::Created(_)));

    let second = builder.ensure_directory_chain("a/b/c").unwrap();
    assert!(matches!(second, DirectoryCreation::AlreadyExisted(_)));
    assert_eq!(first.path(), second.path());

    // nothing new appeared on the second call
    assert_eq!(entries(temp.path()), 1);
    assert_eq!(entries(&temp.path().join("a/b")), 1);
    assert_eq!(entries(&temp.path().join("a/b/c")), 0);
}

#[test]
fn test_every_prefix_exists() {
    let temp = TempDir::new().unwrap();
    PathBuilder::new(temp.path())
        .ensure_directory_chain("a/b/c")
        .unwrap();

    for prefix in ["a", "a/b", "a/b/c"] {
        assert!(temp.path().join(prefix).is_dir(), "{prefix} should be a directory");
    }
}

#[test]
fn test_traversal_and_absolute_paths_are_rejected() {
    let temp = TempDir::new().unwrap();
    let builder = PathBuilder::new(temp.path());

    for path in ["../evil", "/etc/evil", "a/../b", "./a", "a//b", ""] {
        let err = builder.ensure_directory_chain(path).unwrap_err();
        assert!(
            matches!(err, ScaffoldError::InvalidPath { .. }),
            "{path:?} gave {err:?}"
        );
        assert_eq!(err.phase(), Phase::DirectoryCreation);
    }

    assert_eq!(entries(temp.path()), 0);
    assert!(!temp.path().parent().unwrap().join("evil").exists());
}

#[test]
fn test_emit_overwrites_instead_of_appending() {
    let temp = TempDir::new().unwrap();
    let mut batch = Batch::new(temp.path(), Quiet);

    batch.emit("README", "a much longer first version", &[]).unwrap();
    batch.emit("README", "second", &[]).unwrap();

    assert_eq!(fs::read_to_string(temp.path().join("README")).unwrap(), "second");
}

#[test]
fn test_emit_creates_parent_directory_first() {
    let temp = TempDir::new().unwrap();
    let mut batch = Batch::new(temp.path(), Quiet);

    batch.emit("docs/NOTES", "hello", &[]).unwrap();

    assert!(temp.path().join("docs").is_dir());
    assert_eq!(fs::read_to_string(temp.path().join("docs/NOTES")).unwrap(), "hello");
}

#[test]
fn test_emit_stops_when_parent_is_a_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("docs"), "not a directory").unwrap();
    let mut batch = Batch::new(temp.path(), Recorder::default());

    let err = batch.emit("docs/NOTES", "hello", &[]).unwrap_err();

    assert_eq!(err.phase(), Phase::DirectoryCreation);
    assert!(matches!(err, ScaffoldError::DirectoryCreationFailed { .. }));
    assert!(err.os_error().is_some());
    assert!(temp.path().join("docs").is_file());
    assert_eq!(batch.written(), 0);
    assert!(batch.into_observer().events.is_empty());
}

#[test]
fn test_progress_counts_up_and_flags_only_the_last() {
    let temp = TempDir::new().unwrap();
    let mut batch = Batch::new(temp.path(), Recorder::default());

    batch.emit("one", "1", &[]).unwrap();
    batch.emit("dir/two", "2", &[]).unwrap();
    batch.emit("dir/sub/three", "3", &[]).unwrap();
    batch.emit_last("four", "4", &[]).unwrap();

    assert_eq!(batch.written(), 4);
    assert_eq!(
        batch.into_observer().events,
        vec![(1, false), (2, false), (3, false), (4, true)]
    );
}

#[test]
fn test_greeting_end_to_end() {
    let temp = TempDir::new().unwrap();
    let mut batch = Batch::new(temp.path(), Quiet);

    let written = batch
        .emit("greeting.txt", "Hello, %s!", &[Arg::from("World")])
        .unwrap();

    assert_eq!(written, Written { length: 13 });
    assert_eq!(
        fs::read_to_string(temp.path().join("greeting.txt")).unwrap(),
        "Hello, World!"
    );
}

#[test]
fn test_format_mismatch_keeps_previous_content() {
    let temp = TempDir::new().unwrap();
    let mut batch = Batch::new(temp.path(), Recorder::default());

    batch.emit("README", "Hello, %s!", &[Arg::from("World")]).unwrap();
    let err = batch.emit("README", "%s and %s", &[Arg::from("one")]).unwrap_err();

    assert_eq!(err.phase(), Phase::FormatExpansion);
    assert_eq!(
        fs::read_to_string(temp.path().join("README")).unwrap(),
        "Hello, World!"
    );
    assert_eq!(batch.into_observer().events, vec![(1, false)]);
}

#[test]
fn test_directory_in_place_of_file_fails_to_open() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("README")).unwrap();
    let mut batch = Batch::new(temp.path(), Quiet);

    let err = batch.emit("README", "text", &[]).unwrap_err();

    assert!(matches!(err, ScaffoldError::FileOpenFailed { .. }));
    assert_eq!(err.phase(), Phase::FileOpen);
    assert!(err.os_error().is_some());
}
