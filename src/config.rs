//! Reporter configuration parser
//!
//! Parses `reporter.toml` into project settings and summary options.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};
use crate::project::ProjectConfig;
use crate::results::CurrentTestCase;

/// Options for rendering one summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Floor elapsed seconds instead of showing fractions
    pub round_time: bool,
    /// Expected run duration in seconds; zero when unknown
    pub estimated_time: f64,
    /// Terminal columns; zero disables the bar and wrapping
    pub width: usize,
    /// Test cases reported during the current tick
    #[serde(skip)]
    pub current_test_cases: Vec<CurrentTestCase>,
}

/// Top-level reporter configuration parsed from reporter.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Project location and badge
    #[serde(default)]
    pub project: ProjectConfig,
    /// Summary rendering options
    #[serde(default)]
    pub summary: SummaryOptions,
}

impl ReporterConfig {
    /// Parse a reporter.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse reporter.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        let estimated = self.summary.estimated_time;
        if !estimated.is_finite() || estimated < 0.0 {
            return Err(RenderError::ConfigInvalid(format!(
                "summary.estimated_time must be a non-negative number of seconds, got {estimated}"
            )));
        }

        if self.project.root_dir.as_os_str().is_empty() {
            return Err(RenderError::ConfigInvalid(
                "project.root_dir cannot be empty".to_string(),
            ));
        }

        if let Some(display_name) = &self.project.display_name {
            if display_name.name.trim().is_empty() {
                return Err(RenderError::ConfigInvalid(
                    "project.display_name.name cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_CONFIG: &str = r#"
[project]
root_dir = "/repo"
cwd = "/repo/packages/app"
display_name = { name = "app", color = "cyan" }

[summary]
round_time = true
estimated_time = 12.5
width = 100
"#;

    #[test]
    fn test_parse_valid_config() {
        let config = ReporterConfig::parse(VALID_CONFIG).unwrap();

        assert_eq!(config.project.root_dir, PathBuf::from("/repo"));
        assert_eq!(
            config.project.cwd,
            Some(PathBuf::from("/repo/packages/app"))
        );
        assert_eq!(config.project.display_name.unwrap().color, "cyan");
        assert!(config.summary.round_time);
        assert!((config.summary.estimated_time - 12.5).abs() < f64::EPSILON);
        assert_eq!(config.summary.width, 100);
        assert!(config.summary.current_test_cases.is_empty());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ReporterConfig::parse("").unwrap();

        assert_eq!(config.project.root_dir, PathBuf::from("."));
        assert!(config.project.cwd.is_none());
        assert!(!config.summary.round_time);
        assert_eq!(config.summary.width, 0);
    }

    #[test]
    fn test_badge_color_defaults_to_white() {
        let config = ReporterConfig::parse(
            r#"
[project]
display_name = { name = "server" }
"#,
        )
        .unwrap();
        assert_eq!(config.project.display_name.unwrap().color, "white");
    }

    #[test]
    fn test_negative_estimate_rejected() {
        let err = ReporterConfig::parse("[summary]\nestimated_time = -1.0\n").unwrap_err();
        assert!(err.to_string().contains("estimated_time"));
    }

    #[test]
    fn test_empty_root_dir_rejected() {
        let err = ReporterConfig::parse("[project]\nroot_dir = \"\"\n").unwrap_err();
        assert!(matches!(err, RenderError::ConfigInvalid(_)));
    }

    #[test]
    fn test_blank_display_name_rejected() {
        let err = ReporterConfig::parse(
            r#"
[project]
display_name = { name = "  " }
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("display_name"));
    }

    #[test]
    fn test_negative_width_is_a_parse_error() {
        let err = ReporterConfig::parse("[summary]\nwidth = -5\n").unwrap_err();
        assert!(matches!(err, RenderError::Toml(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ReporterConfig::from_path("/nonexistent/reporter.toml").unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
