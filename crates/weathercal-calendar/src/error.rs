//! Calendar-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Authentication required")]
    AuthRequired,

    #[error("Token expired")]
    TokenExpired,

    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

impl CalendarError {
    /// Whether this error should trigger a token refresh by the caller.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::TokenExpired | Self::AuthRequired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_are_classified() {
        assert!(CalendarError::TokenExpired.is_auth_error());
        assert!(CalendarError::AuthRequired.is_auth_error());
        assert!(!CalendarError::EventNotFound("x".into()).is_auth_error());
        assert!(!CalendarError::RateLimited(30).is_auth_error());
    }
}
