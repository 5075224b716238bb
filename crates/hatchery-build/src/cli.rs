use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hatchery_core::{BuildConfig, GrammarError, Result};

#[derive(Parser, Debug)]
#[command(name = "hatchery-build")]
#[command(about = "Build steps for the Hatchery editor extension", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert YAML syntax grammars to JSON (default)
    Grammars(GrammarArgs),
    /// Print the SVG path and vertical extent of a graph link
    LinkPath {
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        #[arg(allow_negative_numbers = true)]
        y2: f64,
    },
}

#[derive(Args, Debug, Default)]
pub struct GrammarArgs {
    /// YAML build configuration
    #[arg(long, env = "HATCHERY_BUILD_CONFIG")]
    pub config: Option<PathBuf>,
    /// Directory containing the `.yaml` grammars
    #[arg(long)]
    pub source: Option<PathBuf>,
    /// Output directory (wiped on every run)
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Convert files one at a time, in name order
    #[arg(long, default_value_t = false)]
    pub sequential: bool,
    /// Convert only the configured single grammar file
    #[arg(long, default_value_t = false)]
    pub single: bool,
}

impl Cli {
    pub fn into_command(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Grammars(GrammarArgs::default()))
    }
}

impl GrammarArgs {
    /// Config file (if any) with command line overrides applied.
    pub fn resolve_config(&self) -> Result<BuildConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| GrammarError::filesystem(path, e))?;
                BuildConfig::from_yaml(&content)?
            }
            None => BuildConfig::default(),
        };

        if let Some(source) = &self.source {
            config.grammars.source_dir = source.clone();
        }
        if let Some(out) = &self.out {
            config.grammars.out_dir = out.clone();
        }

        Ok(config)
    }
}
