//! Hatchery Core Library
//!
//! Grammar conversion (YAML grammars to JSON for the editor extension)
//! and the link geometry used by the graph view.
//!

mod config;
pub mod converter;
pub mod error;
pub mod grammar;
pub mod graph;
pub mod utils;
pub mod vfs;

pub use config::{BuildConfig, GrammarConfig, LoggingConfig, SingleFileConfig};
pub use converter::{Artifact, ConversionReport, Converter, SourceEntry};
pub use error::{GrammarError, Result};
pub use graph::{link_path_segment, link_path_y_max, LinkCurve, LINK_ARC};
pub use utils::output_file_name;
