//! End-to-end tests for writing verification records to disk.

use std::fs;

use chrono::Utc;
use pretty_assertions::assert_eq;
use rstest::rstest;
use sentinel_core::{
    DEFAULT_RESULT_FILE, DEFAULT_RESULTS_DIR, RecordWriter, STUB_MESSAGE, VerificationStatus,
    VerificationStub,
};

/// Validate a JSON value against the record's schemars-generated schema.
fn schema_errors(instance: &serde_json::Value) -> Vec<String> {
    let schema = VerificationStub::json_schema().expect("schema should serialize");
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn results_writer(root: &std::path::Path) -> RecordWriter {
    RecordWriter::new(root.join(DEFAULT_RESULTS_DIR).join(DEFAULT_RESULT_FILE))
}

#[rstest]
#[case(42)]
#[case(7)]
#[case(0)]
#[case(-13)]
fn written_file_carries_seed(#[case] seed: i64) {
    let dir = tempfile::tempdir().unwrap();
    let path = results_writer(dir.path())
        .write(&VerificationStub::new(seed))
        .unwrap();

    let stored: VerificationStub = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(stored.seed, seed);
    assert_eq!(stored.status, VerificationStatus::Stub);
    assert_eq!(stored.message, STUB_MESSAGE);
}

#[test]
fn missing_results_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!dir.path().join(DEFAULT_RESULTS_DIR).exists());

    let path = results_writer(dir.path())
        .write(&VerificationStub::default())
        .unwrap();

    assert!(dir.path().join(DEFAULT_RESULTS_DIR).is_dir());
    assert_eq!(path.file_name().unwrap(), DEFAULT_RESULT_FILE);
}

#[test]
fn existing_results_directory_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join(DEFAULT_RESULTS_DIR)).unwrap();
    fs::write(dir.path().join(DEFAULT_RESULTS_DIR).join("other.txt"), "keep").unwrap();

    results_writer(dir.path())
        .write(&VerificationStub::default())
        .unwrap();

    let kept = fs::read_to_string(dir.path().join(DEFAULT_RESULTS_DIR).join("other.txt")).unwrap();
    assert_eq!(kept, "keep");
}

#[test]
fn second_write_overwrites_first() {
    let dir = tempfile::tempdir().unwrap();
    let writer = results_writer(dir.path());

    // Longer content first so leftover bytes would be visible after a short write.
    fs::create_dir_all(dir.path().join(DEFAULT_RESULTS_DIR)).unwrap();
    fs::write(writer.path(), "x".repeat(4096)).unwrap();

    let first = VerificationStub::new(1);
    writer.write(&first).unwrap();
    let second = VerificationStub::new(2);
    let path = writer.write(&second).unwrap();

    let stored: VerificationStub = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(stored, second);
    assert!(stored.timestamp().unwrap() >= first.timestamp().unwrap());
}

#[test]
fn written_file_has_contract_layout() {
    let dir = tempfile::tempdir().unwrap();
    let stub = VerificationStub::new(9);
    let path = results_writer(dir.path()).write(&stub).unwrap();

    let text = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "{");
    assert_eq!(lines[1], "  \"seed\": 9,");
    assert!(lines[2].starts_with("  \"timestamp_utc\": \""));
    assert!(lines[2].ends_with("Z\","));
    assert_eq!(lines[3], "  \"status\": \"stub\",");
    assert_eq!(
        lines[4],
        "  \"message\": \"Replace stub with full synthetic verification pipeline.\""
    );
    assert_eq!(lines[5], "}");
    assert!(!text.ends_with('\n'));
}

#[test]
fn written_file_validates_against_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = results_writer(dir.path())
        .write(&VerificationStub::new(5))
        .unwrap();

    let instance: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    let errors = schema_errors(&instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn schema_rejects_unknown_status() {
    let instance = serde_json::json!({
        "seed": 42,
        "timestamp_utc": "2024-01-01T00:00:00Z",
        "status": "passed",
        "message": STUB_MESSAGE,
    });
    assert!(!schema_errors(&instance).is_empty());
}

#[test]
fn timestamp_is_close_to_wall_clock() {
    let dir = tempfile::tempdir().unwrap();
    let path = results_writer(dir.path())
        .write(&VerificationStub::new(1))
        .unwrap();

    let stored: VerificationStub = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    let drift = Utc::now() - stored.timestamp().unwrap();
    assert!(drift >= chrono::Duration::zero());
    assert!(drift < chrono::Duration::seconds(5));
}
