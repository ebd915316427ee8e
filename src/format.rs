//! Small text formatters shared by the summary lines

/// Seconds as `"<n> s"`, using the shortest exact decimal form.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    format!("{seconds} s")
}

/// `"1 file"`, `"2 files"`, `"0 files"`
#[must_use]
pub fn pluralize(word: &str, count: u32) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {word}{suffix}")
}
