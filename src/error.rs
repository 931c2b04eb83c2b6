use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the odds dashboard
#[derive(Error, Debug)]
pub enum OddsboardError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    // Network errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Odds service returned {status}")]
    Status { status: StatusCode },

    // Serialization errors
    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl OddsboardError {
    /// True for user-initiated cancellation, which screens must filter
    /// out instead of surfacing in the error banner.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result type alias for OddsboardError
pub type Result<T> = std::result::Result<T, OddsboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_is_not_a_reportable_error() {
        assert!(OddsboardError::Cancelled.is_cancelled());
        assert!(!OddsboardError::Internal("boom".to_string()).is_cancelled());
    }

    #[test]
    fn status_error_mentions_the_code() {
        let err = OddsboardError::Status {
            status: StatusCode::BAD_GATEWAY,
        };
        assert!(err.to_string().contains("502"));
    }
}
