//! Turn a sorted snapshot into connector-drawn text lines.

use crossterm::style::{style, Color, Stylize};

use crate::tree::{Entry, EntryKind};

/// Vertical continuation glyph.
pub const PIPE: char = '\u{2502}'; // │
/// Indentation unit emitted once per ancestor level.
pub const PIPE_EXT: &str = "\u{2502}   "; // │
/// Connector for the last sibling.
pub const ELBOW: &str = "\u{2514}\u{2500}\u{2500} "; // └──
/// Connector for every sibling but the last.
pub const TEE: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
/// First glyph of `ELBOW`; nothing continues below it.
pub const CORNER: char = '\u{2514}'; // └
/// Text of the first line, standing in for the root itself.
pub const ROOT_MARKER: &str = "./";

const HIGHLIGHT_COLOR: Color = Color::DarkBlue;

/// Configuration for the rendering pipeline.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Entries at this depth are listed but never expanded (`None` for unlimited).
    pub max_depth: Option<usize>,
    /// Whether directory names are wrapped in ANSI color codes.
    pub use_color: bool,
}

/// Decoration applied to the root marker and directory names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlighter {
    Ansi,
    Plain,
}

impl Highlighter {
    pub fn for_config(config: &RenderConfig) -> Self {
        if config.use_color {
            Highlighter::Ansi
        } else {
            Highlighter::Plain
        }
    }

    pub fn decorate(self, text: &str) -> String {
        match self {
            Highlighter::Ansi => style(text).with(HIGHLIGHT_COLOR).to_string(),
            Highlighter::Plain => text.to_string(),
        }
    }
}

/// Sanitize control characters to avoid terminal control-sequence injection.
fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Render `entry` depth-first, pre-order, one line per listed entry.
///
/// A root entry contributes the highlighted `./` marker as the first line.
/// Directories at `max_depth` appear as leaves with no hint that they were
/// cut short.
pub fn render_tree(entry: &Entry, config: &RenderConfig) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(
        entry,
        config.max_depth,
        0,
        Highlighter::for_config(config),
        &mut lines,
    );
    lines
}

fn render_into(
    entry: &Entry,
    max_depth: Option<usize>,
    indent: usize,
    highlighter: Highlighter,
    lines: &mut Vec<String>,
) {
    if entry.is_root {
        lines.push(highlighter.decorate(ROOT_MARKER));
    }

    let EntryKind::Directory { children } = &entry.kind else {
        return;
    };
    if max_depth.is_some_and(|max| indent >= max) {
        return;
    }

    let last = children.len().saturating_sub(1);
    for (i, child) in children.iter().enumerate() {
        let mut line = PIPE_EXT.repeat(indent);
        line.push_str(if i == last { ELBOW } else { TEE });
        line.push_str(&label(child, highlighter));
        lines.push(line);

        render_into(child, max_depth, indent + 1, highlighter, lines);
    }
}

/// Display name: highlighted with a trailing `/` for directories, bare for files.
fn label(entry: &Entry, highlighter: Highlighter) -> String {
    let safe_name = sanitize_terminal_text(&entry.name);
    match entry.kind {
        EntryKind::Directory { .. } => format!("{}/", highlighter.decorate(&safe_name)),
        EntryKind::File { .. } => safe_name,
    }
}
