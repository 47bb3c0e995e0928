//! Erase vertical connectors that no longer lead anywhere.
//!
//! Indentation emits `│` for every ancestor level whether or not that
//! ancestor has a later sibling, so a pipe can sit under an elbow or under
//! blank space. Such pipes become spaces.

use crate::render::{CORNER, PIPE};

/// Rewrite dangling pipes to spaces, top to bottom.
///
/// A pipe is erased when the cell above it was `└` in the input, or is a
/// space in the output built so far. Cells past the end of a shorter row
/// read as a space. Line count and every line's length (in chars) are
/// unchanged; the first line is never touched.
pub fn prune_tree(lines: &[String]) -> Vec<String> {
    let original: Vec<Vec<char>> = lines.iter().map(|l| l.chars().collect()).collect();
    let mut pruned: Vec<Vec<char>> = Vec::with_capacity(original.len());

    for (i, row) in original.iter().enumerate() {
        let mut out = row.clone();
        if i > 0 {
            let above_original = &original[i - 1];
            let above_pruned = &pruned[i - 1];
            for (j, ch) in out.iter_mut().enumerate() {
                if *ch == PIPE && dangles(above_original, above_pruned, j) {
                    *ch = ' ';
                }
            }
        }
        pruned.push(out);
    }

    pruned.into_iter().map(String::from_iter).collect()
}

fn dangles(above_original: &[char], above_pruned: &[char], column: usize) -> bool {
    above_original.get(column) == Some(&CORNER)
        || above_pruned.get(column).map_or(true, |c| *c == ' ')
}
