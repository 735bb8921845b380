//! Integration test: structured logging contract.
//!
//! Validates that:
//! 1. LogEmitter writes one valid JSONL line per entry to a file.
//! 2. File validation counts lines and reports schema violations.
//! 3. ArtifactIndex serializes with a SHA-256 per artifact.
//!
//! Run: cargo test -p sprt-harness --test structured_log_test

use std::path::PathBuf;

use sprt_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, StreamKind, validate_log_file,
};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sprt_log_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn emitter_file_output_validates() {
    let path = scratch("emit.jsonl");
    {
        let mut emitter = LogEmitter::to_file(&path, "it").unwrap();
        emitter.emit(LogLevel::Info, "run_start").unwrap();
        emitter
            .emit_entry(
                LogEntry::new("", LogLevel::Info, "symbol_unavailable")
                    .with_stream(StreamKind::Symbols)
                    .with_target("linux-x86_64")
                    .with_mode("consuming")
                    .with_symbol("unistd.h", "setlogin")
                    .with_outcome(Outcome::Skip)
                    .with_errno(38),
            )
            .unwrap();
        emitter.flush().unwrap();
    }

    let (lines, errors) = validate_log_file(&path).unwrap();
    assert_eq!(lines, 2);
    assert!(errors.is_empty(), "{errors:?}");

    let content = std::fs::read_to_string(&path).unwrap();
    let second: serde_json::Value = serde_json::from_str(content.lines().nth(1).unwrap()).unwrap();
    assert_eq!(second["trace_id"], "sprt::it::002");
    assert_eq!(second["errno"], 38);
}

#[test]
fn file_validation_reports_bad_lines() {
    let path = scratch("bad.jsonl");
    let good = LogEntry::new("sprt::x::001", LogLevel::Info, "ok").to_jsonl().unwrap();
    let body = format!("{good}\n\nnot json\n{{\"event\":\"e\"}}\n");
    std::fs::write(&path, body).unwrap();

    let (lines, errors) = validate_log_file(&path).unwrap();
    assert_eq!(lines, 3);
    assert!(errors.iter().any(|e| e.line_number == 3 && e.field == "<json>"));
    assert!(errors.iter().any(|e| e.line_number == 4 && e.field == "timestamp"));
    assert!(errors.iter().all(|e| e.line_number != 1));
}

#[test]
fn artifact_index_serializes() {
    let mut index = ArtifactIndex::new("layout");
    index.add_bytes("layouts.json", "layout-check", b"{}");
    let v: serde_json::Value = serde_json::from_str(&index.to_json().unwrap()).unwrap();
    assert_eq!(v["index_version"], 1);
    assert_eq!(v["artifacts"][0]["kind"], "layout-check");
    assert_eq!(v["artifacts"][0]["sha256"].as_str().unwrap().len(), 64);
}
