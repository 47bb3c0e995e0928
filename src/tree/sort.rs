use std::cmp::Ordering;

use super::{Entry, EntryKind};

/// Recursively order every directory's children: directories first, then
/// files, each group by name in byte order.
///
/// `sort_by` is stable, so duplicate names keep the builder's order.
pub fn sort_tree(mut entry: Entry) -> Entry {
    sort_in_place(&mut entry);
    entry
}

fn sort_in_place(entry: &mut Entry) {
    if let EntryKind::Directory { children } = &mut entry.kind {
        children.sort_by(sort_cmp);
        for child in children.iter_mut() {
            sort_in_place(child);
        }
    }
}

/// Directories before files, then plain `str` ordering (no case folding).
fn sort_cmp(a: &Entry, b: &Entry) -> Ordering {
    kind_rank(a)
        .cmp(&kind_rank(b))
        .then_with(|| a.name.cmp(&b.name))
}

fn kind_rank(entry: &Entry) -> u8 {
    match entry.kind {
        EntryKind::Directory { .. } => 0,
        EntryKind::File { .. } => 1,
    }
}
