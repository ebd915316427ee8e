//! ANSI-aware hard wrapping
//!
//! Re-flows styled text so that no line's visible width exceeds the
//! terminal width. Escape sequences cost nothing and are never split.

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::{tokenize, StyledToken};
use super::width::grapheme_width;

/// Completed lines plus the line currently being filled.
struct LineBuffer {
    finished: Vec<String>,
    current: String,
    current_width: usize,
    width: usize,
}

impl LineBuffer {
    const fn new(width: usize) -> Self {
        Self {
            finished: Vec::new(),
            current: String::new(),
            current_width: 0,
            width,
        }
    }

    fn break_line(&mut self) {
        self.finished.push(std::mem::take(&mut self.current));
        self.current_width = 0;
    }

    fn push_escape(&mut self, sequence: &str) {
        self.current.push_str(sequence);
    }

    fn push_text(&mut self, run: &str) {
        for (i, segment) in run.split('\n').enumerate() {
            if i > 0 {
                self.break_line();
            }
            self.push_segment(segment);
        }
    }

    fn push_segment(&mut self, segment: &str) {
        let mut chunk_start = 0;
        for (idx, grapheme) in segment.grapheme_indices(true) {
            let cluster_width = grapheme_width(grapheme);
            // A cluster wider than the whole line still goes on its own line;
            // zero-width clusters never start one
            if cluster_width > 0
                && self.current_width > 0
                && self.current_width + cluster_width > self.width
            {
                self.current.push_str(&segment[chunk_start..idx]);
                self.break_line();
                chunk_start = idx;
            }
            self.current_width += cluster_width;
        }
        self.current.push_str(&segment[chunk_start..]);
    }

    fn finish(mut self) -> String {
        self.finished.push(self.current);
        self.finished.join("\n")
    }
}

/// Wrap `text` to `width` visible columns.
///
/// Existing newlines are kept and reset the column count. A width of zero
/// disables wrapping and returns the input unchanged.
#[must_use]
pub fn wrap_ansi_string(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut lines = LineBuffer::new(width);
    for token in tokenize(text) {
        match token {
            StyledToken::Escape(sequence) => lines.push_escape(sequence),
            StyledToken::Text(run) => lines.push_text(run),
        }
    }
    lines.finish()
}
