//! Error types
//!
//! Every state transition on the site is total over closed enums, so these
//! errors only surface at the edges: parsing user-supplied keys (CLI),
//! parsing content strings, colors, config and chart rendering.

use thiserror::Error;

use crate::charts::ChartError;
use crate::config::ConfigError;

/// Errors produced by the tandem library
#[derive(Error, Debug)]
pub enum TandemError {
    /// Prompt topic key is not one of the known topics
    #[error("Unknown prompt topic: {0}")]
    UnknownPrompt(String),

    /// Topic explorer key is not in the topic table
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    /// Insight filter is not `all`, `peak` or `friction`
    #[error("Unknown insight filter: {0}")]
    UnknownFilter(String),

    /// Page name is not `home` or `retro`
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Chart id is not one of the site's charts
    #[error("Unknown chart: {0}")]
    UnknownChart(String),

    /// Color string is not `#RRGGBB`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Session item is not `yymmdd - title`
    #[error("Invalid session item '{item}': {reason}")]
    InvalidSession { item: String, reason: String },

    /// Chart rendering failed
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for library operations
pub type TandemResult<T> = Result<T, TandemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TandemError::UnknownFilter("highs".to_string());
        assert_eq!(err.to_string(), "Unknown insight filter: highs");

        let err = TandemError::InvalidSession {
            item: "25-01".to_string(),
            reason: "missing title".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid session item '25-01': missing title"
        );
    }

    #[test]
    fn test_chart_error_conversion() {
        let err: TandemError = ChartError::SurfaceUnavailable.into();
        assert!(matches!(err, TandemError::Chart(_)));
    }
}
