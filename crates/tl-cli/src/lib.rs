//! Timeline visualizer CLI library.
//!
//! This crate provides the `tl` command-line interface: the entry
//! editing layer and the text renderings of the timeline views, all on
//! top of the pure logic in `tl-core`.

mod cli;
pub mod commands;
mod config;
pub mod store;

pub use cli::{AddArgs, Cli, Commands, EditArgs};
pub use config::Config;
