#![allow(missing_docs)]

use std::path::Path;

use chrono::Duration;
use tempfile::TempDir;

use reportline::{
    render_summary, strip_escapes, trim_and_format_path, visible_width, wrap_ansi_string,
    AggregatedResult, CurrentTestCase, ReporterConfig, Styler,
};

const TEST_CONFIG: &str = r#"
[project]
root_dir = "/root"

[summary]
estimated_time = 10.0
width = 50
"#;

const RESULTS_JSON: &str = r#"{
    "numFailedTestSuites": 1,
    "numPassedTestSuites": 2,
    "numPendingTestSuites": 0,
    "numTotalTestSuites": 4,
    "numFailedTests": 1,
    "numPassedTests": 2,
    "numPendingTests": 0,
    "numTodoTests": 0,
    "numTotalTests": 3,
    "snapshot": {
        "added": 0, "updated": 0, "unmatched": 0, "unchecked": 1,
        "filesRemoved": 0, "didUpdate": false, "matched": 4, "total": 5
    },
    "startTime": 1768471200000
}"#;

const CURRENT_JSON: &str = r#"[
    {"testPath": "/root/src/a.test.js", "title": "adds", "status": "passed"},
    {"testPath": "/root/src/a.test.js", "title": "subtracts", "status": "failed"},
    {"testPath": "/root/src/a.test.js", "title": "divides", "status": "queued"}
]"#;

fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("reporter.toml");
    std::fs::write(&path, TEST_CONFIG).unwrap();
    path
}

/// Integration test: config file on disk through to the rendered summary.
///
/// Tests the data flow: reporter.toml -> options, engine JSON -> aggregate,
/// in-flight JSON -> live counts, then the four summary parts.
#[test]
fn test_summary_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let config = ReporterConfig::from_path(write_config(&temp_dir)).unwrap();

    let results = AggregatedResult::from_json(RESULTS_JSON).unwrap();
    let mut options = config.summary.clone();
    options.current_test_cases = CurrentTestCase::list_from_json(CURRENT_JSON).unwrap();

    let now = results.start_time + Duration::seconds(5);
    let summary = render_summary(&results, &options, now, Styler::plain());
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines[0], "Test Suites: 1 failed, 2 passed, 3 of 4 total");
    assert_eq!(lines[1], "Tests:       2 failed, 3 passed, 5 total");
    assert_eq!(lines[2], "Snapshots:   1 obsolete, 4 passed, 5 total");
    assert_eq!(lines[3], "Time:        5 s, estimated 10 s");
    assert_eq!(lines[4], "█".repeat(40));
    assert_eq!(lines.len(), 5);
}

/// Integration test: a styled summary wrapped to a narrow terminal.
///
/// Color comes from the styler alone, with no process-wide override. Every
/// line fits, and dropping the inserted breaks gives the summary back.
#[test]
fn test_styled_summary_wraps_to_terminal() {
    let styler = Styler::new(true);

    let results = AggregatedResult::from_json(RESULTS_JSON).unwrap();
    let config = ReporterConfig::parse(TEST_CONFIG).unwrap();
    let now = results.start_time + Duration::seconds(5);
    let summary = render_summary(&results, &config.summary, now, styler);

    assert!(summary.contains("\x1b[1;31m1 failed\x1b[0m"), "{summary:?}");

    let plain = render_summary(&results, &config.summary, now, Styler::plain());
    assert_eq!(strip_escapes(&summary), plain);

    for width in [12, 20, 33] {
        let wrapped = wrap_ansi_string(&summary, width);
        for line in wrapped.lines() {
            assert!(visible_width(line) <= width, "{line:?} wider than {width}");
        }
        assert_eq!(
            strip_escapes(&wrapped),
            wrap_ansi_string(&plain, width),
            "width {width}"
        );
    }
}

/// Integration test: compacting a path configured from reporter.toml.
#[test]
fn test_path_compaction_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = ReporterConfig::from_path(write_config(&temp_dir)).unwrap();
    let path = Path::new("/root/a/very/long/nested/directory/structure/file.ts");

    let out = trim_and_format_path(0, &config.project, path, 20, Styler::plain()).unwrap();
    assert_eq!(out, "...structure/file.ts");

    let out = trim_and_format_path(0, &config.project, path, 200, Styler::plain()).unwrap();
    assert_eq!(out, "a/very/long/nested/directory/structure/file.ts");
}

/// Integration test: invalid config files surface as errors, not panics.
#[test]
fn test_invalid_config_file_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("reporter.toml");
    std::fs::write(&path, "[summary]\nestimated_time = -3.0\n").unwrap();

    assert!(ReporterConfig::from_path(&path).is_err());
}
