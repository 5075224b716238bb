use super::*;
use crate::vfs::PhysicalFileSystem;
use std::fs;
use tempfile::TempDir;

fn create_test_converter() -> (Converter, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("syntaxes")).unwrap();

    let config = GrammarConfig {
        source_dir: temp_dir.path().join("syntaxes"),
        out_dir: temp_dir.path().join("out"),
        ..GrammarConfig::default()
    };
    let converter = Converter::new(config, Arc::new(PhysicalFileSystem));
    (converter, temp_dir)
}

fn write_source(converter: &Converter, name: &str, content: &str) {
    fs::write(converter.config().source_dir.join(name), content).unwrap();
}

fn out_names(converter: &Converter) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(&converter.config().out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_round_trip_sample() {
    let (converter, _temp_dir) = create_test_converter();
    write_source(&converter, "sample.yaml", "key: value");

    let report = converter.run().unwrap();

    assert_eq!(report.len(), 1);
    let written = fs::read_to_string(converter.config().out_dir.join("sample.json")).unwrap();
    assert_eq!(written, r#"{"key":"value"}"#);
    assert_eq!(report.artifacts[0].bytes, written.len());
}

#[test]
fn test_one_artifact_per_source() {
    let (converter, _temp_dir) = create_test_converter();
    write_source(&converter, "hatchery.tmLanguage.yaml", "name: hatchery");
    write_source(&converter, "lapwing.yaml", "name: lapwing");
    write_source(&converter, "amphitheory.yaml", "name: amphitheory");

    let report = converter.run().unwrap();

    assert_eq!(report.len(), 3);
    assert_eq!(
        out_names(&converter),
        vec!["amphitheory.json", "hatchery.tmLanguage.json", "lapwing.json"]
    );
}

#[test]
fn test_non_qualifying_entries_are_skipped() {
    let (converter, _temp_dir) = create_test_converter();
    let source_dir = converter.config().source_dir.clone();
    write_source(&converter, "grammar.yaml", "a: 1");
    write_source(&converter, "README.md", "# not a grammar");
    write_source(&converter, "grammar.yml", "a: 1");
    fs::create_dir(source_dir.join("nested.yaml")).unwrap();
    fs::write(source_dir.join("nested.yaml").join("inner.yaml"), "a: 1").unwrap();

    let entries = converter.source_entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "grammar.yaml");
    assert_eq!(entries[0].output_name, "grammar.json");

    converter.run().unwrap();
    assert_eq!(out_names(&converter), vec!["grammar.json"]);
}

#[test]
fn test_stale_output_is_removed() {
    let (converter, _temp_dir) = create_test_converter();
    let out_dir = converter.config().out_dir.clone();
    fs::create_dir_all(out_dir.join("leftover")).unwrap();
    fs::write(out_dir.join("old.json"), "{}").unwrap();
    fs::write(out_dir.join("leftover").join("deep.json"), "{}").unwrap();
    write_source(&converter, "new.yaml", "a: 1");

    converter.run().unwrap();

    assert!(!out_dir.join("old.json").exists());
    assert!(!out_dir.join("leftover").exists());
    assert_eq!(out_names(&converter), vec!["new.json"]);
}

#[test]
fn test_empty_source_leaves_empty_destination() {
    let (converter, _temp_dir) = create_test_converter();
    let report = converter.run().unwrap();

    assert!(report.is_empty());
    assert!(converter.config().out_dir.is_dir());
    assert!(out_names(&converter).is_empty());
}

#[test]
fn test_runs_are_idempotent() {
    let (converter, _temp_dir) = create_test_converter();
    write_source(&converter, "a.yaml", "patterns:\n  - match: foo\n    name: keyword\n");
    write_source(&converter, "b.yaml", "scopeName: source.b\nfileTypes: [b]\n");

    let first = converter.run().unwrap();
    let first_bytes = fs::read(converter.config().out_dir.join("a.json")).unwrap();
    let second = converter.run().unwrap();
    let second_bytes = fs::read(converter.config().out_dir.join("a.json")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_parse_failure_stops_the_run() {
    let (converter, _temp_dir) = create_test_converter();
    write_source(&converter, "a.yaml", "a: 1");
    write_source(&converter, "broken.yaml", "patterns: [ { match: foo\n");
    write_source(&converter, "c.yaml", "c: 1");

    let err = converter.run().unwrap_err();

    assert!(err.is_parse(), "unexpected error: {err}");
    assert_eq!(out_names(&converter), vec!["a.json"]);
}

#[test]
fn test_unrepresentable_key_is_serialization_error() {
    let (converter, _temp_dir) = create_test_converter();
    write_source(&converter, "keys.yaml", "? [a, b]\n: 1\n");

    let err = converter.run().unwrap_err();
    assert!(err.is_serialization(), "unexpected error: {err}");
}

#[test]
fn test_invalid_utf8_is_decode_error() {
    let (converter, _temp_dir) = create_test_converter();
    fs::write(converter.config().source_dir.join("bad.yaml"), [0x61, 0x3a, 0x20, 0xff, 0xfe]).unwrap();

    let err = converter.run().unwrap_err();
    assert!(matches!(err, GrammarError::Decode { .. }), "unexpected error: {err}");
}

#[test]
fn test_missing_source_dir_is_filesystem_error() {
    let (converter, temp_dir) = create_test_converter();
    fs::remove_dir(temp_dir.path().join("syntaxes")).unwrap();

    let err = converter.run().unwrap_err();
    assert!(err.is_filesystem(), "unexpected error: {err}");
}

#[test]
fn test_single_file_mode() {
    let (converter, _temp_dir) = create_test_converter();
    write_source(&converter, "hatchery.tmLanguage.yaml", "name: Hatchery\nscopeName: source.hatchery\n");
    write_source(&converter, "other.yaml", "name: other");

    let report = converter.run_single().unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(out_names(&converter), vec!["hatchery.tmLanguage.json"]);
    let written =
        fs::read_to_string(converter.config().out_dir.join("hatchery.tmLanguage.json")).unwrap();
    assert_eq!(written, r#"{"name":"Hatchery","scopeName":"source.hatchery"}"#);
}

#[test]
fn test_single_file_mode_missing_input() {
    let (converter, _temp_dir) = create_test_converter();
    let err = converter.run_single().unwrap_err();
    assert!(err.is_filesystem(), "unexpected error: {err}");
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_skipped() {
    let (converter, _temp_dir) = create_test_converter();
    let source_dir = converter.config().source_dir.clone();
    write_source(&converter, "good.yaml", "a: 1");
    std::os::unix::fs::symlink("/nonexistent/target", source_dir.join("notes.txt")).unwrap();
    std::os::unix::fs::symlink("/nonexistent/target", source_dir.join("gone.yaml")).unwrap();

    let report = converter.run().unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(out_names(&converter), vec!["good.json"]);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_name_is_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let (converter, _temp_dir) = create_test_converter();
    let source_dir = converter.config().source_dir.clone();
    write_source(&converter, "good.yaml", "a: 1");
    fs::write(source_dir.join(OsStr::from_bytes(b"bad\xff.yaml")), "b: 2").unwrap();

    let entries = converter.source_entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "good.yaml");

    converter.run().unwrap();
    assert_eq!(out_names(&converter), vec!["good.json"]);
}
