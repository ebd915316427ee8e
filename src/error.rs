//! Error types for rendering and configuration loading

use thiserror::Error;

/// Errors raised by the rendering layer and its config loader.
///
/// Rendering itself is lenient: unknown statuses, zero widths and paths
/// outside the project root never produce an error. Only a column budget
/// whose arithmetic would go negative is rejected.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The padding reserved by the caller exceeds the terminal width
    #[error("Invalid column budget: padding {pad} exceeds {columns} available columns")]
    InvalidBudget {
        /// Terminal columns available
        columns: usize,
        /// Columns reserved for the caller's prefix
        pad: usize,
    },

    /// The budget is too small to hold even the `...` ellipsis
    #[error("Invalid column budget: {max_length} columns cannot hold an ellipsis")]
    EllipsisDoesNotFit {
        /// Columns left for the path
        max_length: usize,
    },

    /// The configuration parsed but holds invalid values
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    /// Reading an input file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML configuration failed to parse
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Aggregate result JSON failed to parse
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, RenderError>;
