//! Project settings used when displaying test files

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::style::{parse_color, Styler};

/// Label shown in front of a project's test files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayName {
    /// Text of the badge
    pub name: String,
    /// Badge color name (e.g. `"cyan"`, `"blueBright"`)
    #[serde(default = "default_badge_color")]
    pub color: String,
}

fn default_badge_color() -> String {
    "white".to_string()
}

/// Where a project lives and how it is labelled
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project root directory
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,
    /// Working directory; takes precedence over `root_dir` when relativizing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
    /// Optional badge for multi-project runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<DisplayName>,
}

fn default_root_dir() -> PathBuf {
    PathBuf::from(".")
}

impl ProjectConfig {
    /// A project rooted at `root_dir` with no working directory or badge
    #[must_use]
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            cwd: None,
            display_name: None,
        }
    }

    /// Directory test paths are shown relative to
    #[must_use]
    pub fn reference_root(&self) -> &Path {
        self.cwd.as_deref().unwrap_or(&self.root_dir)
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::new(default_root_dir())
    }
}

/// Render the project's badge.
///
/// Empty when there is no display name. With color the name is padded and
/// shown in inverse video; without color the bare name is returned.
#[must_use]
pub fn print_display_name(project: &ProjectConfig, styler: Styler) -> String {
    let Some(DisplayName { name, color }) = &project.display_name else {
        return String::new();
    };
    if !styler.is_enabled() {
        return name.clone();
    }
    styler.inverse(&format!(" {name} "), parse_color(color))
}
