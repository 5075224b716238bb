//! Hatchery Build Library
//!
//! Runtime layer for the grammar build: concurrent conversion and the
//! command line surface. Conversion logic itself lives in `hatchery-core`.

pub mod cli;
pub mod runner;

pub use cli::{Cli, Commands, GrammarArgs};
pub use runner::run_concurrent;
