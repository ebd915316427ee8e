//! Elapsed time line and progress bar

use tracing::trace;

use crate::format::format_time;
use crate::style::Styler;

/// Widest bar ever drawn, whatever the terminal width
pub const PROGRESS_BAR_WIDTH: usize = 40;

/// Runs estimated at this many seconds or less get no bar
const MIN_ESTIMATE_FOR_BAR: f64 = 2.0;

/// Seconds past the estimate before the elapsed time is highlighted
const OVERRUN_GRACE: f64 = 1.0;

const BAR_GLYPH: &str = "█";

/// Inputs for the time line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingInput {
    /// Seconds since the run started
    pub elapsed_seconds: f64,
    /// Expected run duration in seconds; zero when unknown
    pub estimated_seconds: f64,
    /// Terminal columns available to the bar; zero disables it
    pub available_columns: usize,
}

/// A proportional bar: `filled` of `width` cells done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBar {
    /// Completed cells
    pub filled: usize,
    /// Total cells
    pub width: usize,
}

impl ProgressBar {
    /// Compute the bar, if one should be shown.
    ///
    /// Only when the estimate exceeds two seconds, the run has not reached it
    /// yet, and at least two columns are available.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn compute(input: TimingInput) -> Option<Self> {
        let TimingInput {
            elapsed_seconds,
            estimated_seconds,
            available_columns,
        } = input;

        let worth_showing = estimated_seconds > MIN_ESTIMATE_FOR_BAR
            && elapsed_seconds < estimated_seconds
            && available_columns > 0;
        if !worth_showing {
            return None;
        }

        let width = available_columns.min(PROGRESS_BAR_WIDTH);
        if width < 2 {
            trace!(available_columns, "Too narrow for a progress bar");
            return None;
        }

        // Float-to-int `as` saturates, so NaN and negatives floor to zero
        let filled = ((elapsed_seconds / estimated_seconds) * width as f64).floor() as usize;
        Some(Self {
            filled: filled.min(width),
            width,
        })
    }

    /// Filled segment in green followed by the rest in white.
    ///
    /// Always `width` cells; a `filled` past the end counts as full.
    #[must_use]
    pub fn render(self, styler: Styler) -> String {
        let filled = self.filled.min(self.width);
        format!(
            "{}{}",
            styler.green(&BAR_GLYPH.repeat(filled)),
            styler.white(&BAR_GLYPH.repeat(self.width.saturating_sub(filled)))
        )
    }
}

/// The `Time:` line, with the progress bar on a second line when shown.
#[must_use]
pub fn render_time(input: TimingInput, styler: Styler) -> String {
    let TimingInput {
        elapsed_seconds,
        estimated_seconds,
        ..
    } = input;

    let formatted = format_time(elapsed_seconds);
    let running_over =
        estimated_seconds > 0.0 && elapsed_seconds >= estimated_seconds + OVERRUN_GRACE;
    let rendered_time = if running_over {
        styler.bold_yellow(&formatted)
    } else {
        formatted
    };

    let mut time = format!("{}        {rendered_time}", styler.bold("Time:"));
    if elapsed_seconds < estimated_seconds {
        time.push_str(&format!(", estimated {}", format_time(estimated_seconds)));
    }

    if let Some(bar) = ProgressBar::compute(input) {
        time.push('\n');
        time.push_str(&bar.render(styler));
    }
    time
}
