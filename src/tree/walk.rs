use std::io;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use super::{is_hidden, Entry, TreeConfig};
use crate::error::{Result, TreeError};

/// Snapshot the filesystem below `root` into an [`Entry`] tree.
///
/// Children keep the order walkdir yields them in; [`super::sort_tree`]
/// fixes the order afterwards. The first traversal or metadata error
/// aborts the build.
pub fn build_tree(root: &Path, config: &TreeConfig) -> Result<Entry> {
    let walker = WalkDir::new(root).follow_links(config.follow_symlinks);

    // filter_entry also stops descent into hidden or ignored directories,
    // not just their display.
    let hide = config.hide;
    let ignore_patterns = config.ignore_patterns.clone();
    let walk_root = root.to_path_buf();
    let iter = walker.into_iter().filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        if is_hidden(&entry.file_name().to_string_lossy(), hide) {
            return false;
        }
        let relative = entry
            .path()
            .strip_prefix(&walk_root)
            .unwrap_or_else(|_| entry.path());
        !ignore_patterns.is_match(relative)
    });

    // open[d] is the directory at depth d whose children are still arriving.
    let mut open: Vec<Entry> = Vec::new();

    for entry_result in iter {
        let entry = entry_result.map_err(|e| TreeError::from_walk(e, root))?;
        let depth = entry.depth();
        trace!(path = %entry.path().display(), depth, "visit");

        // Pre-order: anything deeper than this entry's parent is complete.
        close_to(&mut open, depth.max(1));

        let node = snapshot_entry(&entry)?;
        let node = if depth == 0 { node.into_root() } else { node };

        if node.is_dir() {
            open.push(node);
        } else if let Some(parent) = open.last_mut() {
            push_child(parent, node);
        } else {
            // The root itself is a file.
            open.push(node);
        }
    }

    close_to(&mut open, 1);
    let tree = open.pop().ok_or_else(|| {
        TreeError::from_io(root.to_path_buf(), io::Error::from(io::ErrorKind::NotFound))
    })?;

    let stats = tree.stats();
    debug!(
        root = %root.display(),
        directories = stats.directories,
        files = stats.files,
        bytes = stats.bytes,
        "snapshot built"
    );
    Ok(tree)
}

/// Capture one walked entry. Directories start with no children.
///
/// A file whose metadata cannot be read yields `TreeError::Stat`, which
/// stops the whole build.
fn snapshot_entry(entry: &DirEntry) -> Result<Entry> {
    let name = entry.file_name().to_string_lossy().into_owned();
    if entry.file_type().is_dir() {
        return Ok(Entry::directory(name, Vec::new()));
    }
    let metadata = entry
        .metadata()
        .map_err(|source| stat_error(entry.path(), source))?;
    Ok(Entry::file(name, metadata.len()))
}

fn stat_error(path: &Path, source: walkdir::Error) -> TreeError {
    TreeError::Stat {
        path: path.to_path_buf(),
        source: source.into(),
    }
}

/// Pop finished directories into their parents until `len` remain open.
fn close_to(open: &mut Vec<Entry>, len: usize) {
    while open.len() > len {
        if let Some(done) = open.pop() {
            if let Some(parent) = open.last_mut() {
                push_child(parent, done);
            }
        }
    }
}

fn push_child(parent: &mut Entry, child: Entry) {
    if let super::EntryKind::Directory { children } = &mut parent.kind {
        children.push(child);
    }
}
