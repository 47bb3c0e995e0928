//! Errors raised while snapshotting a directory.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

/// Every source is an `io::Error`; walkdir errors, including symlink loops,
/// are converted on the way in.
///
/// Any of these aborts the whole build; no partial tree is ever returned.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("{}: No such file or directory", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: Permission denied", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: failed to walk directory", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: failed to read metadata", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    /// Classify a traversal error by its underlying I/O kind.
    ///
    /// `fallback` names the walk root and is used when walkdir cannot tell
    /// which path failed.
    pub fn from_walk(err: walkdir::Error, fallback: &Path) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback.to_path_buf());
        Self::from_io(path, err.into())
    }

    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => TreeError::NotFound { path, source },
            io::ErrorKind::PermissionDenied => TreeError::PermissionDenied { path, source },
            _ => TreeError::Walk { path, source },
        }
    }

    /// The path the failure was reported for.
    pub fn path(&self) -> &Path {
        match self {
            TreeError::NotFound { path, .. }
            | TreeError::PermissionDenied { path, .. }
            | TreeError::Walk { path, .. }
            | TreeError::Stat { path, .. } => path,
        }
    }
}
