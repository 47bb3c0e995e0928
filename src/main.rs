#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use sproutree::cli::Args;
use sproutree::render::RenderConfig;
use sproutree::terminal::{buffered_stdout, write_lines};
use sproutree::tree::{build_ignore_set, TreeConfig};
use sproutree::{grow, logging};
use std::io::Write;
use tracing::info;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("sproutree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    if !args.quiet {
        logging::init(args.verbose);
    }

    let tree_config = TreeConfig {
        hide: !args.show_hidden,
        follow_symlinks: !args.no_follow,
        ignore_patterns: build_ignore_set(&args.ignore).context("invalid --ignore pattern")?,
    };
    let render_config = RenderConfig {
        max_depth: args.max_depth,
        use_color: !args.no_color,
    };

    info!(
        path = %args.path.display(),
        hide = tree_config.hide,
        max_depth = ?render_config.max_depth,
        "listing"
    );

    // Nothing reaches stdout unless the whole pipeline succeeded.
    let lines = grow(&args.path, &tree_config, &render_config)?;

    let mut stdout = buffered_stdout();
    write_lines(&mut stdout, &lines).context("failed to write output")?;
    stdout.flush().context("failed to write output")?;
    Ok(())
}
