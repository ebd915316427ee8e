//! Reportline - status output for test-run reporters
//!
//! Renders terminal-width-aware summary lines: compacted test file paths,
//! live pass/fail/skip counters, an elapsed-time line with a progress bar,
//! and a wrapper that keeps color escape sequences intact and zero-width.
//! Every renderer is a pure function of its arguments.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod format;
pub mod path;
pub mod progress;
pub mod project;
pub mod results;
pub mod style;
pub mod text;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use config::{ReporterConfig, SummaryOptions};
pub use error::{RenderError, Result};
pub use path::{compact_path, format_test_path, relative_path, trim_and_format_path, PathParts};
pub use progress::{render_time, ProgressBar, TimingInput};
pub use project::{print_display_name, DisplayName, ProjectConfig};
pub use results::{
    render_summary, tally_current_test_cases, AggregatedResult, CurrentTestCase, LiveCounts,
    SnapshotSummary, TestStatus,
};
pub use style::Styler;
pub use text::{strip_escapes, visible_width, wrap_ansi_string, StyledToken};
