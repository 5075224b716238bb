//! Directory-level grammar conversion.
//!
//! A run wipes the destination, lists the source directory (one level),
//! and writes one JSON artifact per `.yaml` file. The first failure ends
//! the run; whatever was already written stays on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::GrammarConfig;
use crate::error::{GrammarError, Result};
use crate::grammar;
use crate::utils::{compute_digest, output_file_name};
use crate::vfs::{DirEntry, FileSystem};

#[cfg(test)]
mod tests;

/// A source file that qualified for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub name: String,
    pub path: PathBuf,
    pub output_name: String,
}

/// A file written to the destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub source: PathBuf,
    pub path: PathBuf,
    pub bytes: usize,
    pub digest: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub artifacts: Vec<Artifact>,
}

impl ConversionReport {
    pub fn new(mut artifacts: Vec<Artifact>) -> Self {
        artifacts.sort_by(|a, b| a.path.cmp(&b.path));
        Self { artifacts }
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.artifacts.iter().map(|a| a.bytes).sum()
    }
}

#[derive(Clone)]
pub struct Converter {
    config: Arc<GrammarConfig>,
    fs: Arc<dyn FileSystem>,
}

impl Converter {
    pub fn new(config: GrammarConfig, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            config: Arc::new(config),
            fs,
        }
    }

    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Remove the destination directory if present, then recreate it empty.
    pub fn prepare_destination(&self) -> Result<()> {
        let out_dir = &self.config.out_dir;

        if self.fs.exists(out_dir) {
            log::debug!("Removing previous output at {:?}", out_dir);
            self.fs
                .remove_dir_all(out_dir)
                .map_err(|e| GrammarError::filesystem(out_dir, e))?;
        }

        self.fs
            .create_dir_all(out_dir)
            .map_err(|e| GrammarError::filesystem(out_dir, e))
    }

    /// Regular files in the source directory whose name ends with the
    /// source extension, in name order.
    pub fn source_entries(&self) -> Result<Vec<SourceEntry>> {
        let source_dir = &self.config.source_dir;
        let entries = self
            .fs
            .read_dir(source_dir)
            .map_err(|e| GrammarError::filesystem(source_dir, e))?;

        Ok(entries
            .iter()
            .filter_map(|entry| self.qualify(entry))
            .collect())
    }

    fn qualify(&self, entry: &DirEntry) -> Option<SourceEntry> {
        if !entry.is_file {
            log::trace!("Skipping non-file {:?}", entry.path);
            return None;
        }

        let Some(name) = entry.file_name() else {
            log::trace!("Skipping non UTF-8 name {:?}", entry.path);
            return None;
        };

        let Some(output_name) = output_file_name(
            name,
            &self.config.source_extension,
            &self.config.target_extension,
        ) else {
            log::trace!("Skipping {:?}", entry.path);
            return None;
        };

        Some(SourceEntry {
            name: name.to_string(),
            path: entry.path.clone(),
            output_name,
        })
    }

    pub fn convert_entry(&self, entry: &SourceEntry) -> Result<Artifact> {
        self.convert_file(&entry.path, &entry.output_name)
    }

    /// Read `source`, translate it, and write it as `output_name` inside the
    /// destination directory.
    pub fn convert_file(&self, source: &Path, output_name: &str) -> Result<Artifact> {
        let raw = self
            .fs
            .read_all(source)
            .map_err(|e| GrammarError::filesystem(source, e))?;
        let text = String::from_utf8(raw).map_err(|e| GrammarError::Decode {
            path: source.to_path_buf(),
            source: e,
        })?;

        let json = grammar::convert_text(source, &text)?;

        let path = self.config.out_dir.join(output_name);
        self.fs
            .write_all(&path, &json)
            .map_err(|e| GrammarError::filesystem(&path, e))?;

        log::info!("Converted {:?} -> {:?}", source, path);

        Ok(Artifact {
            source: source.to_path_buf(),
            path,
            bytes: json.len(),
            digest: compute_digest(&json),
        })
    }

    /// Convert every qualifying entry, one after another.
    pub fn run(&self) -> Result<ConversionReport> {
        self.prepare_destination()?;

        let entries = self.source_entries()?;
        log::info!(
            "Converting {} grammar(s) from {:?}",
            entries.len(),
            self.config.source_dir
        );

        let mut artifacts = Vec::with_capacity(entries.len());
        for entry in &entries {
            artifacts.push(self.convert_entry(entry)?);
        }

        Ok(ConversionReport::new(artifacts))
    }

    /// Convert only the configured single input into its fixed output name.
    pub fn run_single(&self) -> Result<ConversionReport> {
        self.prepare_destination()?;

        let single = &self.config.single_file;
        let source = self.config.source_dir.join(&single.input);
        let artifact = self.convert_file(&source, &single.output)?;

        Ok(ConversionReport::new(vec![artifact]))
    }
}
