//! Live counters
//!
//! Merges finalized aggregate counts with test cases that reported during
//! the current tick.

use tracing::trace;

use super::model::{AggregatedResult, CurrentTestCase, TestStatus};

/// Counters for one category (suites or tests).
///
/// `total` is authoritative; it is never re-derived from the other fields,
/// since partial runs may under- or over-count them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiveCounts {
    /// Failed
    pub failed: u32,
    /// Passed
    pub passed: u32,
    /// Skipped
    pub pending: u32,
    /// Todo (always zero for suites)
    pub todo: u32,
    /// Total
    pub total: u32,
}

impl LiveCounts {
    /// Suite counters from the aggregate
    #[must_use]
    pub const fn suites(results: &AggregatedResult) -> Self {
        Self {
            failed: results.num_failed_test_suites,
            passed: results.num_passed_test_suites,
            pending: results.num_pending_test_suites,
            todo: 0,
            total: results.num_total_test_suites,
        }
    }

    /// Test counters from the aggregate
    #[must_use]
    pub const fn tests(results: &AggregatedResult) -> Self {
        Self {
            failed: results.num_failed_tests,
            passed: results.num_passed_tests,
            pending: results.num_pending_tests,
            todo: results.num_todo_tests,
            total: results.num_total_tests,
        }
    }

    /// Field-wise sum
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            failed: self.failed.saturating_add(other.failed),
            passed: self.passed.saturating_add(other.passed),
            pending: self.pending.saturating_add(other.pending),
            todo: self.todo.saturating_add(other.todo),
            total: self.total.saturating_add(other.total),
        }
    }

    /// Units that finished running: failed plus passed
    #[must_use]
    pub const fn run(self) -> u32 {
        self.failed.saturating_add(self.passed)
    }
}

/// Count in-flight test cases by status.
///
/// Each recognized status bumps its counter and the total. Unknown statuses
/// are skipped entirely, total included.
#[must_use]
pub fn tally_current_test_cases(cases: &[CurrentTestCase]) -> LiveCounts {
    let mut counts = LiveCounts::default();
    for case in cases {
        match &case.status {
            TestStatus::Failed => counts.failed += 1,
            TestStatus::Passed => counts.passed += 1,
            TestStatus::Skipped => counts.pending += 1,
            TestStatus::Todo => counts.todo += 1,
            TestStatus::Unknown(status) => {
                trace!(status = %status, title = %case.title, "Ignoring test case with unknown status");
                continue;
            }
        }
        counts.total += 1;
    }
    counts
}

/// Aggregate test counts plus the in-flight tally
#[must_use]
pub fn live_test_counts(results: &AggregatedResult, cases: &[CurrentTestCase]) -> LiveCounts {
    LiveCounts::tests(results).merge(tally_current_test_cases(cases))
}
