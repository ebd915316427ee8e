//! Test file path display
//!
//! Relativizes test paths against the project and compacts them to a column
//! budget. The base name always wins: the directory is trimmed first, and the
//! base name is only cut when it cannot fit on its own.

use std::path::{Component, Path, PathBuf};

use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{RenderError, Result};
use crate::project::ProjectConfig;
use crate::style::Styler;
use crate::text::{grapheme_width, text_width};

const ELLIPSIS: &str = "...";
const SEPARATOR: char = '/';

/// A relativized test path split into directory and file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    /// Directory part, forward-slash separated; `"."` for files in the root
    pub dirname: String,
    /// Final path segment
    pub basename: String,
}

/// Split `test_path` relative to the project's reference root.
#[must_use]
pub fn relative_path(project: &ProjectConfig, test_path: &Path) -> PathParts {
    let relative = relativize(project.reference_root(), test_path);
    let basename = relative
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dirname = match relative.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => to_forward_slashes(parent),
        _ => ".".to_string(),
    };
    PathParts { dirname, basename }
}

/// Lexical relative path from `root` to `path`.
///
/// Paths outside `root` climb out with `..`. When one side is absolute and
/// the other is not there is no common base and `path` is returned as is.
fn relativize(root: &Path, path: &Path) -> PathBuf {
    if let Ok(inside) = path.strip_prefix(root) {
        return inside.to_path_buf();
    }

    let root_parts: Vec<Component<'_>> = root
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();
    let path_parts: Vec<Component<'_>> = path
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();

    if root.is_absolute() != path.is_absolute() {
        return path.to_path_buf();
    }

    let common = root_parts
        .iter()
        .zip(&path_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..root_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part);
    }
    relative
}

fn to_forward_slashes(path: &Path) -> String {
    let display = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == SEPARATOR {
        display.into_owned()
    } else {
        display.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Dim directory plus separator, bold base name.
fn join_styled(dirname: &str, basename: &str, styler: Styler) -> String {
    format!(
        "{}{}",
        styler.dim(&format!("{dirname}{SEPARATOR}")),
        styler.bold(basename)
    )
}

/// Longest suffix of `s` that fits in `max_width` columns, cut only at a
/// grapheme boundary.
fn tail_within(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (idx, grapheme) in s.grapheme_indices(true).rev() {
        width += grapheme_width(grapheme);
        if width > max_width {
            break;
        }
        start = idx;
    }
    &s[start..]
}

/// Full styled path with no truncation.
#[must_use]
pub fn format_test_path(project: &ProjectConfig, test_path: &Path, styler: Styler) -> String {
    let PathParts { dirname, basename } = relative_path(project, test_path);
    join_styled(&dirname, &basename, styler)
}

/// Styled path trimmed to `columns - pad` display columns.
///
/// Fails with [`RenderError::InvalidBudget`] when `pad` exceeds `columns`.
/// See [`compact_path`] for the trimming rules.
pub fn trim_and_format_path(
    pad: usize,
    project: &ProjectConfig,
    test_path: &Path,
    columns: usize,
    styler: Styler,
) -> Result<String> {
    let max_length = columns
        .checked_sub(pad)
        .ok_or(RenderError::InvalidBudget { columns, pad })?;
    compact_path(&relative_path(project, test_path), max_length, styler)
}

/// Fit `parts` into `max_length` display columns.
///
/// In order: the whole path if it fits; `...` plus the tail of the directory
/// and the full base name; `.../` plus the base name; `...` plus the tail of
/// the base name. A `max_length` of zero means "do not truncate". Budgets
/// of one or two columns cannot hold the ellipsis and are rejected.
pub fn compact_path(parts: &PathParts, max_length: usize, styler: Styler) -> Result<String> {
    let PathParts { dirname, basename } = parts;
    let basename_width = text_width(basename);

    if max_length == 0 || text_width(dirname) + 1 + basename_width <= max_length {
        return Ok(join_styled(dirname, basename, styler));
    }

    if basename_width + 4 < max_length {
        let tail = tail_within(dirname, max_length - 4 - basename_width);
        debug!(max_length, kept = tail.len(), "Trimmed directory of {basename}");
        return Ok(join_styled(&format!("{ELLIPSIS}{tail}"), basename, styler));
    }

    if basename_width + 4 == max_length {
        debug!(max_length, "Collapsed directory of {basename}");
        return Ok(join_styled(ELLIPSIS, basename, styler));
    }

    let kept = max_length
        .checked_sub(ELLIPSIS.len())
        .ok_or(RenderError::EllipsisDoesNotFit { max_length })?;
    debug!(max_length, "Trimmed base name {basename}");
    Ok(styler.bold(&format!("{ELLIPSIS}{}", tail_within(basename, kept))))
}
