//! Snapshot → sort → render → prune.

use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::prune::prune_tree;
use crate::render::{render_tree, RenderConfig};
use crate::tree::{sort_tree, TreeBuilder, TreeConfig, WalkdirTreeBuilder};

/// Produce the final tree lines for `root` using the walkdir builder.
///
/// Every phase runs to completion before the next starts; a filesystem
/// error during the snapshot means no lines at all.
pub fn grow(
    root: &Path,
    tree_config: &TreeConfig,
    render_config: &RenderConfig,
) -> Result<Vec<String>> {
    grow_with(&WalkdirTreeBuilder, root, tree_config, render_config)
}

/// Same as [`grow`] with a caller-supplied snapshot builder.
pub fn grow_with<B: TreeBuilder>(
    builder: &B,
    root: &Path,
    tree_config: &TreeConfig,
    render_config: &RenderConfig,
) -> Result<Vec<String>> {
    let snapshot = builder.build_tree(root, tree_config)?;
    let sorted = sort_tree(snapshot);
    let lines = render_tree(&sorted, render_config);
    debug!(lines = lines.len(), max_depth = ?render_config.max_depth, "rendered");
    Ok(prune_tree(&lines))
}
