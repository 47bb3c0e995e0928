#![forbid(unsafe_code)]
//! Sproutree: print a directory as an indented, connector-drawn text tree.

pub mod cli;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod prune;
pub mod render;
pub mod terminal;
pub mod tree;

pub use error::{Result, TreeError};
pub use pipeline::grow;
