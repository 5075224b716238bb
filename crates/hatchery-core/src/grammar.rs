//! YAML grammar documents and their JSON encoding.
//!
//! The document shape is opaque here: whatever tree the YAML describes is
//! carried over as-is. Mapping order follows the source file.

use std::path::Path;

use crate::error::{GrammarError, Result};

/// In-memory form of one grammar file.
pub type GrammarDocument = serde_yaml::Value;

/// Parse YAML text into a grammar document. `path` only labels errors.
pub fn parse_grammar(path: &Path, text: &str) -> Result<GrammarDocument> {
    serde_yaml::from_str(text).map_err(|source| GrammarError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Compact JSON encoding of a grammar document.
pub fn to_json(path: &Path, document: &GrammarDocument) -> Result<Vec<u8>> {
    serde_json::to_vec(document).map_err(|source| GrammarError::Serialization {
        path: path.to_path_buf(),
        source,
    })
}

/// YAML text in, JSON bytes out.
pub fn convert_text(path: &Path, text: &str) -> Result<Vec<u8>> {
    let document = parse_grammar(path, text)?;
    to_json(path, &document)
}
