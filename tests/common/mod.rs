#![allow(dead_code)]

use sproutree::render::RenderConfig;
use sproutree::tree::{Entry, TreeConfig};
use std::fs;
use tempfile::TempDir;

/// Default TreeConfig: hide rule on, no ignores.
pub fn default_tree_config() -> TreeConfig {
    TreeConfig::default()
}

/// RenderConfig with color disabled.
pub fn no_color_render_config(max_depth: Option<usize>) -> RenderConfig {
    RenderConfig {
        max_depth,
        use_color: false,
    }
}

/// RenderConfig with color enabled.
pub fn color_render_config(max_depth: Option<usize>) -> RenderConfig {
    RenderConfig {
        max_depth,
        use_color: true,
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Overwrite `rel` under `tmp` with `size` bytes.
pub fn write_sized(tmp: &TempDir, rel: &str, size: usize) {
    fs::write(tmp.path().join(rel), vec![b'x'; size]).unwrap();
}

/// Small mixed tree: `sub1/file2.txt` (100 bytes) and
/// `file6.txt` (empty).
pub fn sample_fixture() -> TempDir {
    let tmp = create_fixture(&["sub1/", "sub1/file2.txt", "file6.txt"]);
    write_sized(&tmp, "sub1/file2.txt", 100);
    tmp
}

/// Remove ANSI CSI sequences (ESC '[' ... final byte).
pub fn strip_ansi(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for f in chars.by_ref() {
                if ('@'..='~').contains(&f) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Depth-first visit of every entry with its depth (root = 0).
pub fn walk<'a>(entry: &'a Entry, depth: usize, out: &mut Vec<(usize, &'a Entry)>) {
    out.push((depth, entry));
    for child in entry.children() {
        walk(child, depth + 1, out);
    }
}

/// Every entry name in the tree below (and including) `entry`.
pub fn all_names(entry: &Entry) -> Vec<String> {
    let mut visited = Vec::new();
    walk(entry, 0, &mut visited);
    visited.into_iter().map(|(_, e)| e.name.clone()).collect()
}
