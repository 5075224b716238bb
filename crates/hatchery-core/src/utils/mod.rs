use sha2::{Digest, Sha256};

/// Derive an output file name from a source file name.
///
/// Strips the single trailing `source_extension` and appends
/// `target_extension`. Returns `None` when the name does not end with
/// the source extension.
///
/// # Examples
///
/// ```
/// use hatchery_core::output_file_name;
///
/// assert_eq!(output_file_name("lapwing.yaml", ".yaml", ".json").as_deref(), Some("lapwing.json"));
/// assert_eq!(
///     output_file_name("hatchery.tmLanguage.yaml", ".yaml", ".json").as_deref(),
///     Some("hatchery.tmLanguage.json")
/// );
/// assert_eq!(output_file_name("notes.txt", ".yaml", ".json"), None);
/// ```
pub fn output_file_name(name: &str, source_extension: &str, target_extension: &str) -> Option<String> {
    name.strip_suffix(source_extension)
        .map(|stem| format!("{stem}{target_extension}"))
}

/// SHA-256 of `bytes` as lowercase hex.
pub fn compute_digest(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
