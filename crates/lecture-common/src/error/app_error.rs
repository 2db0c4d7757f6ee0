//! Application error types
//!
//! Failures from collaborators outside the domain, classified for logging.

use lecture_core::RewriteError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // External service errors
    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("External service timed out: {0}")]
    ExternalTimeout(String),
}

impl AppError {
    /// Stable error code for log fields
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::ExternalTimeout(_) => "EXTERNAL_SERVICE_TIMEOUT",
        }
    }

    /// Check if retrying the same call later could succeed
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ExternalTimeout(_))
    }
}

impl From<RewriteError> for AppError {
    fn from(err: RewriteError) -> Self {
        match err {
            RewriteError::Timeout => Self::ExternalTimeout("rewriter".to_string()),
            other => Self::ExternalService(other.to_string()),
        }
    }
}
