mod common;

use common::{
    color_render_config, create_fixture, default_tree_config, no_color_render_config,
    sample_fixture, strip_ansi,
};
use sproutree::render::{render_tree, RenderConfig, ELBOW, PIPE_EXT, ROOT_MARKER, TEE};
use sproutree::tree::{build_tree, sort_tree, Entry};
use tempfile::TempDir;

fn rendered(tmp: &TempDir, config: &RenderConfig) -> Vec<String> {
    let tree = sort_tree(build_tree(tmp.path(), &default_tree_config()).unwrap());
    render_tree(&tree, config)
}

#[test]
fn test_sample_tree_unbounded() {
    let lines = rendered(&sample_fixture(), &no_color_render_config(None));
    assert_eq!(
        lines,
        vec![
            "./".to_string(),
            format!("{TEE}sub1/"),
            format!("{PIPE_EXT}{ELBOW}file2.txt"),
            format!("{ELBOW}file6.txt"),
        ]
    );
}

#[test]
fn test_sample_tree_depth_one() {
    let lines = rendered(&sample_fixture(), &no_color_render_config(Some(1)));
    assert_eq!(
        lines,
        vec![
            "./".to_string(),
            format!("{TEE}sub1/"),
            format!("{ELBOW}file6.txt"),
        ]
    );
}

#[test]
fn test_root_marker_always_first() {
    let tmp = create_fixture(&[".hidden/"]);
    let lines = rendered(&tmp, &no_color_render_config(None));
    assert_eq!(lines, vec![ROOT_MARKER]);
}

#[test]
fn test_depth_cap_bounds_indentation() {
    let tmp = create_fixture(&["a/", "a/b/", "a/b/c/", "a/b/c/d/", "a/b/c/d/e.txt"]);
    for cap in 0..5 {
        let lines = rendered(&tmp, &no_color_render_config(Some(cap)));
        // One line per level up to the cap, plus the root marker.
        assert_eq!(lines.len(), cap + 1, "cap {cap}: {lines:?}");
        for line in &lines[1..] {
            let indent = line.matches(PIPE_EXT).count();
            assert!(indent < cap, "cap {cap}: {line:?}");
        }
    }
    assert_eq!(rendered(&tmp, &no_color_render_config(None)).len(), 6);
}

#[test]
fn test_elbow_only_on_last_sibling() {
    let tmp = create_fixture(&["one.txt", "two.txt", "three.txt"]);
    let lines = rendered(&tmp, &no_color_render_config(None));
    assert_eq!(lines[1], format!("{TEE}one.txt"));
    assert_eq!(lines[2], format!("{TEE}three.txt"));
    assert_eq!(lines[3], format!("{ELBOW}two.txt"));
}

#[test]
fn test_color_only_changes_decoration() {
    let tmp = sample_fixture();
    let plain = rendered(&tmp, &no_color_render_config(None));
    let colored = rendered(&tmp, &color_render_config(None));
    let stripped: Vec<String> = colored.iter().map(|l| strip_ansi(l)).collect();
    assert_eq!(stripped, plain);
    // File lines never carry escape codes.
    assert_eq!(colored[2], plain[2]);
    assert_eq!(colored[3], plain[3]);
}

#[test]
fn test_render_in_memory_tree() {
    let tree = Entry::directory(
        "root",
        vec![
            Entry::directory("a", vec![Entry::directory("b", vec![Entry::file("c", 0)])]),
            Entry::file("d", 0),
        ],
    )
    .into_root();
    let lines = render_tree(&tree, &no_color_render_config(None));
    assert_eq!(
        lines,
        vec![
            "./".to_string(),
            format!("{TEE}a/"),
            format!("{PIPE_EXT}{ELBOW}b/"),
            format!("{PIPE_EXT}{PIPE_EXT}{ELBOW}c"),
            format!("{ELBOW}d"),
        ]
    );
}
