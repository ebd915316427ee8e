//! Display width in terminal columns
//!
//! Width is measured per grapheme cluster, so an emoji with a variation
//! selector or a joined emoji sequence is sized as the single glyph the
//! terminal draws. Wrapping, path compaction and [`visible_width`] all
//! measure through here.
//!
//! [`visible_width`]: super::visible_width

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Columns taken by one grapheme cluster.
///
/// Control characters (tab, carriage return, other C0/C1 codes) take none.
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.chars().any(char::is_control) {
        0
    } else {
        grapheme.width()
    }
}

/// Columns taken by plain (escape-free) text.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.graphemes(true).map(grapheme_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_and_cjk() {
        assert_eq!(text_width("file.ts"), 7);
        assert_eq!(text_width("测试"), 4);
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn test_control_characters_take_no_columns() {
        assert_eq!(text_width("a\tb"), 2);
        assert_eq!(text_width("\r"), 0);
        assert_eq!(grapheme_width("\u{7}"), 0);
    }

    #[test]
    fn test_variation_selector_sized_with_its_base() {
        let heart = "❤\u{fe0f}";
        assert_eq!(heart.graphemes(true).count(), 1);
        assert_eq!(text_width(heart), grapheme_width(heart));
        assert_eq!(text_width(&heart.repeat(3)), 3 * grapheme_width(heart));
    }

    #[test]
    fn test_zero_width_joiner_sequence_is_one_cluster() {
        let family = "👨\u{200d}👩\u{200d}👧";
        assert_eq!(family.graphemes(true).count(), 1);
        assert_eq!(text_width(family), grapheme_width(family));
    }
}
