//! Aggregate result records as produced by the test engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

/// Snapshot statistics for a run. Passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotSummary {
    /// Snapshots written for the first time
    pub added: u32,
    /// Snapshots rewritten by `--update`
    pub updated: u32,
    /// Snapshots that did not match
    pub unmatched: u32,
    /// Snapshots no test checked (obsolete)
    pub unchecked: u32,
    /// Obsolete snapshot files
    pub files_removed: u32,
    /// Whether the run was allowed to update snapshots
    pub did_update: bool,
    /// Snapshots that matched
    pub matched: u32,
    /// All snapshots seen
    pub total: u32,
}

/// Finalized counts for the run so far
///
/// Counters missing from the record read as zero; `startTime` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResult {
    /// Suites with at least one failure
    #[serde(default)]
    pub num_failed_test_suites: u32,
    /// Suites that passed
    #[serde(default)]
    pub num_passed_test_suites: u32,
    /// Suites that were skipped
    #[serde(default)]
    pub num_pending_test_suites: u32,
    /// Suites scheduled for the run
    #[serde(default)]
    pub num_total_test_suites: u32,
    /// Failed tests
    #[serde(default)]
    pub num_failed_tests: u32,
    /// Passed tests
    #[serde(default)]
    pub num_passed_tests: u32,
    /// Skipped tests
    #[serde(default)]
    pub num_pending_tests: u32,
    /// Tests marked todo
    #[serde(default)]
    pub num_todo_tests: u32,
    /// Tests reported so far
    #[serde(default)]
    pub num_total_tests: u32,
    /// Snapshot statistics
    #[serde(default)]
    pub snapshot: SnapshotSummary,
    /// When the run started (milliseconds since the epoch on the wire)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
}

impl AggregatedResult {
    /// Parse the engine's JSON record
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Status of a test case reported during the current tick.
///
/// Statuses this crate does not know are kept as [`TestStatus::Unknown`]
/// so newer engines never break rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TestStatus {
    /// The test failed
    Failed,
    /// The test passed
    Passed,
    /// The test was skipped
    Skipped,
    /// The test is a todo placeholder
    Todo,
    /// Any other status string
    Unknown(String),
}

impl From<String> for TestStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "failed" => Self::Failed,
            "passed" => Self::Passed,
            "skipped" => Self::Skipped,
            "todo" => Self::Todo,
            _ => Self::Unknown(status),
        }
    }
}

impl From<&str> for TestStatus {
    fn from(status: &str) -> Self {
        Self::from(status.to_string())
    }
}

impl From<TestStatus> for String {
    fn from(status: TestStatus) -> Self {
        match status {
            TestStatus::Failed => "failed".to_string(),
            TestStatus::Passed => "passed".to_string(),
            TestStatus::Skipped => "skipped".to_string(),
            TestStatus::Todo => "todo".to_string(),
            TestStatus::Unknown(other) => other,
        }
    }
}

/// A test case that has reported but may not be in the aggregate yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTestCase {
    /// File the test lives in
    #[serde(default)]
    pub test_path: PathBuf,
    /// Full test title
    #[serde(default)]
    pub title: String,
    /// Reported status
    pub status: TestStatus,
}

impl CurrentTestCase {
    /// Parse a JSON array of in-flight test cases
    pub fn list_from_json(content: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(content)?)
    }
}
