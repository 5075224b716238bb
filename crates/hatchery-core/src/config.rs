use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for the Hatchery build step
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BuildConfig {
    #[serde(default)]
    pub grammars: GrammarConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Grammar conversion settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrammarConfig {
    /// Directory holding the YAML grammars (not searched recursively)
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    /// Output directory. Wiped and recreated on every run.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    /// Suffix a source file name must end with, including the dot
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    /// Suffix appended to the stripped source name
    #[serde(default = "default_target_extension")]
    pub target_extension: String,
    #[serde(default)]
    pub single_file: SingleFileConfig,
}

/// Fixed input/output pair used by single-file mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SingleFileConfig {
    /// File name inside `source_dir`
    #[serde(default = "default_single_input")]
    pub input: String,
    /// File name written inside `out_dir`
    #[serde(default = "default_single_output")]
    pub output: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Whether to print the per-artifact summary after a run
    #[serde(default = "default_true")]
    pub show_summary: bool,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("syntaxes")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_source_extension() -> String {
    ".yaml".to_string()
}

fn default_target_extension() -> String {
    ".json".to_string()
}

fn default_single_input() -> String {
    "hatchery.tmLanguage.yaml".to_string()
}

fn default_single_output() -> String {
    "hatchery.tmLanguage.json".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            out_dir: default_out_dir(),
            source_extension: default_source_extension(),
            target_extension: default_target_extension(),
            single_file: SingleFileConfig::default(),
        }
    }
}

impl Default for SingleFileConfig {
    fn default() -> Self {
        Self {
            input: default_single_input(),
            output: default_single_output(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            show_summary: default_true(),
        }
    }
}

impl BuildConfig {
    /// Load config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
