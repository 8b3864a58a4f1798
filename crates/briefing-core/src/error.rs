//! Error types for the briefing system.

use thiserror::Error;

/// Top-level briefing error.
#[derive(Error, Debug)]
pub enum BriefingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Upstream data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for the requested range")]
    NoData,

    #[error("Missing API key: {0}")]
    MissingApiKey(String),
}

impl DataError {
    /// Whether a failure is worth another attempt. Missing data and missing
    /// credentials will not improve on retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DataError::Network(_)
                | DataError::Api(_)
                | DataError::RateLimited(_)
                | DataError::Parse(_)
        )
    }
}

/// Report generation errors.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(String),
}

/// Notification channel errors.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error: {0}")]
    Api(String),
}

/// Result type alias for briefing operations.
pub type BriefingResult<T> = Result<T, BriefingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(DataError::Network("timeout".into()).is_transient());
        assert!(DataError::RateLimited("429".into()).is_transient());
        assert!(!DataError::NoData.is_transient());
        assert!(!DataError::MissingApiKey("FRED_API_KEY".into()).is_transient());
        assert!(!DataError::SymbolNotFound("XYZ".into()).is_transient());
    }
}
