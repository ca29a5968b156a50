use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Rate limited by the document API, please try again later")]
    RateLimited,

    #[error("Fighter not found: {0}")]
    FighterNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Snapshot error: {0}")]
    SnapshotError(String),
}

impl AppError {
    /// Network or backend failure while retrieving a collection.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AppError::ApiError { .. } | AppError::RateLimited | AppError::HttpError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_classification() {
        assert!(AppError::RateLimited.is_fetch_failure());
        assert!(AppError::HttpError("connection reset".into()).is_fetch_failure());
        assert!(AppError::ApiError { status: 503, message: "unavailable".into() }.is_fetch_failure());
        assert!(!AppError::JsonError("bad".into()).is_fetch_failure());
        assert!(!AppError::FighterNotFound("x".into()).is_fetch_failure());
    }
}
