//! Internal implementation for directory chains

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

use super::DirectoryCreation;

/// A validated `/`-separated path below the project root.
///
/// No segment is empty, `.` or `..`; the path is never absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativePath {
    segments: Vec<String>,
}

impl RelativePath {
    pub fn parse(path: &str) -> Result<Self, ScaffoldError> {
        if path.is_empty() {
            return Err(ScaffoldError::invalid(path, "path is empty"));
        }
        if path.starts_with('/') {
            return Err(ScaffoldError::invalid(path, "absolute paths are not allowed"));
        }
        if path.contains('\0') {
            return Err(ScaffoldError::invalid(path, "path contains a NUL byte"));
        }

        let mut segments = Vec::new();
        for segment in path.split('/') {
            match segment {
                "" => return Err(ScaffoldError::invalid(path, "empty path segment")),
                "." => return Err(ScaffoldError::invalid(path, "`.` segments are not allowed")),
                ".." => return Err(ScaffoldError::invalid(path, "`..` segments are not allowed")),
                _ => segments.push(segment.to_string()),
            }
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment (the file name when this names a file)
    pub fn file_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Everything but the last segment, `None` for a single segment
    pub fn parent(&self) -> Option<RelativePath> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    pub fn resolve(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        path.extend(&self.segments);
        path
    }
}

impl std::fmt::Display for RelativePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// Create each prefix of `relative` below `root`, shortest first
pub fn create_chain(root: &Path, relative: &RelativePath) -> Result<DirectoryCreation, ScaffoldError> {
    let mut current = root.to_path_buf();
    let mut created_any = false;

    for segment in relative.segments() {
        current.push(segment);
        match make_dir(&current) {
            Ok(()) => {
                tracing::debug!(path = %current.display(), "created directory");
                created_any = true;
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                // EEXIST is only fine when a directory (or a link to one) is there
                match fs::metadata(&current) {
                    Ok(meta) if meta.is_dir() => {}
                    Ok(_) => {
                        return Err(ScaffoldError::DirectoryCreationFailed {
                            segment: current,
                            source: e,
                        });
                    }
                    Err(source) => {
                        return Err(ScaffoldError::DirectoryCreationFailed {
                            segment: current,
                            source,
                        });
                    }
                }
            }
            Err(source) => {
                return Err(ScaffoldError::DirectoryCreationFailed {
                    segment: current,
                    source,
                });
            }
        }
    }

    if created_any {
        Ok(DirectoryCreation::Created(current))
    } else {
        Ok(DirectoryCreation::AlreadyExisted(current))
    }
}

#[cfg(unix)]
fn make_dir(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().mode(0o755).create(path)
}

#[cfg(not(unix))]
fn make_dir(path: &Path) -> io::Result<()> {
    fs::DirBuilder::new().create(path)
}
