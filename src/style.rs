//! Terminal styling
//!
//! Wraps text runs in SGR escape sequences built from `colored`'s color
//! codes. Whether color is emitted is an explicit value carried by
//! [`Styler`]; `colored`'s process-wide override is never consulted, so
//! every renderer stays a function of its arguments.

use std::borrow::Cow;
use std::io::IsTerminal;

use colored::Color;

const BOLD: &str = "1";
const DIMMED: &str = "2";
const REVERSED: &str = "7";
const RESET: &str = "\x1b[0m";

/// Styling capability handed to every renderer.
///
/// A disabled styler returns its input untouched, which degrades all output
/// to plain text with identical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    /// Create a styler with color output switched on or off
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A styler that never emits escape sequences
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// Decide from the environment: stdout must be a terminal and
    /// `NO_COLOR` must be unset.
    #[must_use]
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!no_color && std::io::stdout().is_terminal())
    }

    /// Whether escape sequences are emitted
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Dim text (directory prefixes)
    #[must_use]
    pub fn dim(self, text: &str) -> String {
        self.paint(text, &[DIMMED], None)
    }

    /// Bold text (labels, base names)
    #[must_use]
    pub fn bold(self, text: &str) -> String {
        self.paint(text, &[BOLD], None)
    }

    /// Bold red (failures)
    #[must_use]
    pub fn bold_red(self, text: &str) -> String {
        self.paint(text, &[BOLD], Some(Color::Red))
    }

    /// Bold yellow (skipped, obsolete, running over the estimate)
    #[must_use]
    pub fn bold_yellow(self, text: &str) -> String {
        self.paint(text, &[BOLD], Some(Color::Yellow))
    }

    /// Bold green (passed, written, updated, removed)
    #[must_use]
    pub fn bold_green(self, text: &str) -> String {
        self.paint(text, &[BOLD], Some(Color::Green))
    }

    /// Bold magenta (todo)
    #[must_use]
    pub fn bold_magenta(self, text: &str) -> String {
        self.paint(text, &[BOLD], Some(Color::Magenta))
    }

    /// Green (filled progress segment)
    #[must_use]
    pub fn green(self, text: &str) -> String {
        self.paint(text, &[], Some(Color::Green))
    }

    /// White (unfilled progress segment)
    #[must_use]
    pub fn white(self, text: &str) -> String {
        self.paint(text, &[], Some(Color::White))
    }

    /// Inverse video in the given color, used for project badges
    #[must_use]
    pub fn inverse(self, text: &str, color: Color) -> String {
        self.paint(text, &[REVERSED], Some(color))
    }

    /// `ESC [ attrs;color m text ESC [0m`, the same shape `colored` emits.
    fn paint(self, text: &str, attrs: &[&'static str], color: Option<Color>) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }
        let codes: Vec<Cow<'static, str>> = attrs
            .iter()
            .map(|attr| Cow::Borrowed(*attr))
            .chain(color.map(|c| c.to_fg_str()))
            .collect();
        format!("\x1b[{}m{text}{RESET}", codes.join(";"))
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::plain()
    }
}

/// Resolve a color name such as `"cyan"` or `"blueBright"`.
///
/// Unknown names fall back to white.
#[must_use]
pub fn parse_color(name: &str) -> Color {
    let normalized = name.strip_suffix("Bright").map_or_else(
        || name.to_ascii_lowercase(),
        |base| format!("bright {}", base.to_ascii_lowercase()),
    );
    normalized.parse().unwrap_or(Color::White)
}
