//! Escape-sequence tokenizer
//!
//! Splits styled text into plain runs and SGR escape sequences. Recognized
//! sequences are `ESC [ params m` where ESC is U+001B or the single-char
//! CSI U+009B and `params` is a `;`-separated list of 1-3 digit numbers.

use super::width::text_width;

const ESCAPE_INTRODUCERS: [char; 2] = ['\u{1b}', '\u{9b}'];
const MAX_PARAM_DIGITS: usize = 3;

/// A run of styled text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyledToken<'a> {
    /// Visible text; contributes its display width
    Text(&'a str),
    /// An escape sequence; zero width and never split
    Escape(&'a str),
}

impl StyledToken<'_> {
    /// Display columns this token occupies
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::Text(text) => text_width(text),
            Self::Escape(_) => 0,
        }
    }

    /// The token's source slice
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Escape(s) => *s,
        }
    }
}

/// Tokenize `text` left to right into alternating text and escape runs.
///
/// Text before the first escape, between escapes and after the last escape
/// each become one `Text` token. Concatenating the tokens gives back `text`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<StyledToken<'_>> {
    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut i = 0;

    while i < text.len() {
        if let Some(len) = escape_len(&text[i..]) {
            if i != run_start {
                tokens.push(StyledToken::Text(&text[run_start..i]));
            }
            tokens.push(StyledToken::Escape(&text[i..i + len]));
            i += len;
            run_start = i;
        } else {
            i += text[i..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if run_start < text.len() {
        tokens.push(StyledToken::Text(&text[run_start..]));
    }

    tokens
}

/// Byte length of the escape sequence at the start of `s`, if there is one.
fn escape_len(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, introducer) = chars.next()?;
    if !ESCAPE_INTRODUCERS.contains(&introducer) {
        return None;
    }
    let (_, '[') = chars.next()? else {
        return None;
    };

    let mut digits = 0;
    for (idx, c) in chars {
        match c {
            '0'..='9' if digits < MAX_PARAM_DIGITS => digits += 1,
            ';' if digits > 0 => digits = 0,
            'm' if digits > 0 => return Some(idx + 1),
            _ => return None,
        }
    }
    None
}

/// Remove every recognized escape sequence.
#[must_use]
pub fn strip_escapes(text: &str) -> String {
    tokenize(text)
        .iter()
        .filter_map(|token| match token {
            StyledToken::Text(s) => Some(*s),
            StyledToken::Escape(_) => None,
        })
        .collect()
}

/// Display columns of `text`, ignoring escape sequences.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    tokenize(text).iter().map(StyledToken::width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_plain_text_is_one_token() {
        assert_eq!(tokenize("hello"), vec![StyledToken::Text("hello")]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_styled_run() {
        let tokens = tokenize("a\x1b[1mbold\x1b[22m tail");
        assert_eq!(
            tokens,
            vec![
                StyledToken::Text("a"),
                StyledToken::Escape("\x1b[1m"),
                StyledToken::Text("bold"),
                StyledToken::Escape("\x1b[22m"),
                StyledToken::Text(" tail"),
            ]
        );
    }

    #[test]
    fn test_tokenize_flushes_single_trailing_char() {
        let tokens = tokenize("\x1b[31mx");
        assert_eq!(
            tokens,
            vec![StyledToken::Escape("\x1b[31m"), StyledToken::Text("x")]
        );
    }

    #[test]
    fn test_tokenize_adjacent_escapes() {
        let tokens = tokenize("\x1b[1m\x1b[31m");
        assert_eq!(
            tokens,
            vec![
                StyledToken::Escape("\x1b[1m"),
                StyledToken::Escape("\x1b[31m")
            ]
        );
    }

    #[test]
    fn test_tokenize_combined_params() {
        let tokens = tokenize("\x1b[1;31mfail\x1b[0m");
        assert_eq!(tokens[0], StyledToken::Escape("\x1b[1;31m"));
        assert_eq!(tokens[1], StyledToken::Text("fail"));
    }

    #[test]
    fn test_tokenize_csi_introducer() {
        let tokens = tokenize("\u{9b}[2mdim");
        assert_eq!(tokens[0], StyledToken::Escape("\u{9b}[2m"));
        assert_eq!(tokens[1], StyledToken::Text("dim"));
    }

    #[test]
    fn test_malformed_sequences_are_text() {
        for input in ["\x1b[m", "\x1b[1234m", "\x1b[1;m", "\x1b[12", "\x1bx"] {
            let tokens = tokenize(input);
            assert!(
                tokens.iter().all(|t| matches!(t, StyledToken::Text(_))),
                "{input:?} should not be an escape"
            );
        }
    }

    #[test]
    fn test_tokens_concatenate_to_input() {
        let input = "x\x1b[32m✓\x1b[39m ünïcode \x1b[1;33mwarn\x1b[0m!";
        let joined: String = tokenize(input).iter().map(StyledToken::as_str).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn test_strip_escapes() {
        assert_eq!(strip_escapes("\x1b[2mdir/\x1b[22m\x1b[1mfile\x1b[22m"), "dir/file");
    }

    #[test]
    fn test_visible_width_ignores_escapes() {
        assert_eq!(visible_width("\x1b[1;32m5 passed\x1b[0m"), 8);
        assert_eq!(visible_width("你好"), 4);
    }

    #[test]
    fn test_visible_width_control_and_emoji() {
        assert_eq!(visible_width("ab\tcd"), 4);
        assert_eq!(
            visible_width("\x1b[31m❤\u{fe0f}\x1b[39m"),
            text_width("❤\u{fe0f}")
        );
    }
}
