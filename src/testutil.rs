//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use chrono::{TimeZone, Utc};

use crate::results::{AggregatedResult, CurrentTestCase, TestStatus};

/// An aggregate with every counter at zero and a fixed start time.
#[must_use]
pub fn sample_results() -> AggregatedResult {
    AggregatedResult {
        start_time: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        ..AggregatedResult::default()
    }
}

/// An in-flight test case with the given status string.
#[must_use]
pub fn case(status: &str) -> CurrentTestCase {
    CurrentTestCase {
        test_path: "/root/src/sum.test.js".into(),
        title: format!("reports {status}"),
        status: TestStatus::from(status),
    }
}
