//! Summary lines: suites, tests, snapshots and time
//!
//! Clause order is fixed so output stays byte-compatible with golden files
//! recorded from existing reporters.

use chrono::{DateTime, Utc};

use super::model::{AggregatedResult, SnapshotSummary};
use super::tally::{live_test_counts, LiveCounts};
use crate::config::SummaryOptions;
use crate::format::pluralize;
use crate::progress::{render_time, TimingInput};
use crate::style::Styler;

const SUITES_LABEL: &str = "Test Suites: ";
const TESTS_LABEL: &str = "Tests:       ";
const SNAPSHOTS_LABEL: &str = "Snapshots:   ";

/// Label followed by the clauses, comma separated
fn join_line(label: &str, clauses: &[String], styler: Styler) -> String {
    format!("{}{}", styler.bold(label), clauses.join(", "))
}

/// `Test Suites:` line.
///
/// Ends in `"<run> of <total> total"` while suites are still outstanding,
/// where run counts failed and passed suites only.
#[must_use]
pub fn render_suites_line(suites: LiveCounts, styler: Styler) -> String {
    let mut clauses = Vec::new();
    if suites.failed > 0 {
        clauses.push(styler.bold_red(&format!("{} failed", suites.failed)));
    }
    if suites.pending > 0 {
        clauses.push(styler.bold_yellow(&format!("{} skipped", suites.pending)));
    }
    if suites.passed > 0 {
        clauses.push(styler.bold_green(&format!("{} passed", suites.passed)));
    }

    let run = suites.run();
    if run == suites.total {
        clauses.push(format!("{} total", suites.total));
    } else {
        clauses.push(format!("{run} of {} total", suites.total));
    }
    join_line(SUITES_LABEL, &clauses, styler)
}

/// `Tests:` line from live (aggregate plus in-flight) counts
#[must_use]
pub fn render_tests_line(tests: LiveCounts, styler: Styler) -> String {
    let mut clauses = Vec::new();
    if tests.failed > 0 {
        clauses.push(styler.bold_red(&format!("{} failed", tests.failed)));
    }
    if tests.pending > 0 {
        clauses.push(styler.bold_yellow(&format!("{} skipped", tests.pending)));
    }
    if tests.todo > 0 {
        clauses.push(styler.bold_magenta(&format!("{} todo", tests.todo)));
    }
    if tests.passed > 0 {
        clauses.push(styler.bold_green(&format!("{} passed", tests.passed)));
    }
    clauses.push(format!("{} total", tests.total));
    join_line(TESTS_LABEL, &clauses, styler)
}

/// `Snapshots:` line.
///
/// Outdated snapshots read "obsolete" on a normal run and "removed" when the
/// run was updating snapshots; obsolete files follow the same rule.
#[must_use]
pub fn render_snapshots_line(snapshot: &SnapshotSummary, styler: Styler) -> String {
    let mut clauses = Vec::new();
    if snapshot.unmatched > 0 {
        clauses.push(styler.bold_red(&format!("{} failed", snapshot.unmatched)));
    }
    if snapshot.unchecked > 0 {
        clauses.push(if snapshot.did_update {
            styler.bold_green(&format!("{} removed", snapshot.unchecked))
        } else {
            styler.bold_yellow(&format!("{} obsolete", snapshot.unchecked))
        });
    }
    if snapshot.files_removed > 0 {
        let files = pluralize("file", snapshot.files_removed);
        clauses.push(if snapshot.did_update {
            styler.bold_green(&format!("{files} removed"))
        } else {
            styler.bold_yellow(&format!("{files} obsolete"))
        });
    }
    if snapshot.updated > 0 {
        clauses.push(styler.bold_green(&format!("{} updated", snapshot.updated)));
    }
    if snapshot.added > 0 {
        clauses.push(styler.bold_green(&format!("{} written", snapshot.added)));
    }
    if snapshot.matched > 0 {
        clauses.push(styler.bold_green(&format!("{} passed", snapshot.matched)));
    }
    clauses.push(format!("{} total", snapshot.total));
    join_line(SNAPSHOTS_LABEL, &clauses, styler)
}

/// Seconds between the run's start and `now`, never negative
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn elapsed_seconds(start_time: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let millis = (now - start_time).num_milliseconds().max(0);
    millis as f64 / 1000.0
}

/// The full four-part summary for one reporting tick.
///
/// `now` is passed in so rendering stays deterministic.
#[must_use]
pub fn render_summary(
    results: &AggregatedResult,
    options: &SummaryOptions,
    now: DateTime<Utc>,
    styler: Styler,
) -> String {
    let mut run_time = elapsed_seconds(results.start_time, now);
    if options.round_time {
        run_time = run_time.floor();
    }

    let tests = live_test_counts(results, &options.current_test_cases);
    let timing = TimingInput {
        elapsed_seconds: run_time,
        estimated_seconds: options.estimated_time,
        available_columns: options.width,
    };

    [
        render_suites_line(LiveCounts::suites(results), styler),
        render_tests_line(tests, styler),
        render_snapshots_line(&results.snapshot, styler),
        render_time(timing, styler),
    ]
    .join("\n")
}
