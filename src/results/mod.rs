//! Test results
//!
//! The engine's aggregate record, live counter merging, and the summary
//! lines rendered from them.

pub mod model;
pub mod summary;
pub mod tally;

pub use model::{AggregatedResult, CurrentTestCase, SnapshotSummary, TestStatus};
pub use summary::{
    render_snapshots_line, render_suites_line, render_summary, render_tests_line,
};
pub use tally::{live_test_counts, tally_current_test_cases, LiveCounts};
