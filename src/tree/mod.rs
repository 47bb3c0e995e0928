//! Directory snapshot: building, filtering and sorting.

mod sort;
pub(crate) mod walk;

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

use crate::error::Result;

pub use sort::sort_tree;
pub use walk::build_tree;

/// Name prefixes excluded by the hide rule.
pub const HIDDEN_PREFIXES: &[&str] = &["__", "."];

/// One node of the in-memory directory snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Base name (filename component only).
    pub name: String,
    /// True only for the top node handed to the builder.
    pub is_root: bool,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Directory {
        children: Vec<Entry>,
    },
    File {
        /// Suffix after the last `.`, without the dot; empty if none.
        extension: String,
        /// Size in bytes.
        size: u64,
    },
}

impl Entry {
    pub fn directory(name: impl Into<String>, children: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            is_root: false,
            kind: EntryKind::Directory { children },
        }
    }

    pub fn file(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let extension = extension_of(&name);
        Self {
            name,
            is_root: false,
            kind: EntryKind::File { extension, size },
        }
    }

    /// Mark this entry as the top of its tree.
    pub fn into_root(mut self) -> Self {
        self.is_root = true;
        self
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory { .. })
    }

    /// Children of a directory; empty for files.
    pub fn children(&self) -> &[Entry] {
        match &self.kind {
            EntryKind::Directory { children } => children,
            EntryKind::File { .. } => &[],
        }
    }

    /// Count every descendant (the entry itself excluded) and sum file sizes.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        for child in self.children() {
            match &child.kind {
                EntryKind::Directory { .. } => stats.directories += 1,
                EntryKind::File { size, .. } => {
                    stats.files += 1;
                    stats.bytes += size;
                }
            }
            let nested = child.stats();
            stats.directories += nested.directories;
            stats.files += nested.files;
            stats.bytes += nested.bytes;
        }
        stats
    }
}

/// Totals over a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
    pub bytes: u64,
}

/// Configuration for snapshot building.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Exclude descendants whose name starts with `.` or `__`.
    pub hide: bool,
    /// Whether to follow symbolic links during traversal. When off, a link
    /// is listed as a file with the link's own size.
    pub follow_symlinks: bool,
    /// Glob patterns, matched against the path relative to the root.
    pub ignore_patterns: GlobSet,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            hide: true,
            follow_symlinks: true,
            ignore_patterns: GlobSet::empty(),
        }
    }
}

/// Abstraction over snapshot construction so it can be swapped or mocked.
pub trait TreeBuilder {
    fn build_tree(&self, root: &Path, config: &TreeConfig) -> Result<Entry>;
}

/// Default `TreeBuilder` that delegates to the walkdir-based implementation.
pub struct WalkdirTreeBuilder;

impl TreeBuilder for WalkdirTreeBuilder {
    fn build_tree(&self, root: &Path, config: &TreeConfig) -> Result<Entry> {
        build_tree(root, config)
    }
}

/// Whether `name` falls under the hide rule when hiding is enabled.
pub fn is_hidden(name: &str, hide: bool) -> bool {
    hide && HIDDEN_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// Build a GlobSet from user patterns. Any invalid pattern is an error.
pub fn build_ignore_set(patterns: &[String]) -> std::result::Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    builder.build()
}

fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}
