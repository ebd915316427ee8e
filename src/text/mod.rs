//! Styled text handling
//!
//! Tokenizing escape sequences, measuring display width and wrapping
//! styled strings to a width.

pub mod ansi;
pub mod width;
pub mod wrap;

pub use ansi::{strip_escapes, tokenize, visible_width, StyledToken};
pub use width::{grapheme_width, text_width};
pub use wrap::wrap_ansi_string;
