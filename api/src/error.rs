//! Error taxonomy for the REST client.
//!
//! Every endpoint function returns `Result<T, ApiError>`. The variants map to
//! the failure classes the views care about:
//!
//! - [`ApiError::Network`] — the request never produced a response.
//! - [`ApiError::Unauthorized`] — HTTP 401. Handled centrally in
//!   [`crate::client`] (session cleared, browser sent to `/login`) before the
//!   error reaches the caller.
//! - [`ApiError::Api`] — any other non-2xx status, carrying the
//!   server-supplied message verbatim so views can show it unchanged.
//! - [`ApiError::Decode`] — a 2xx response whose body did not match the
//!   expected shape.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("session expired, please sign in again")]
    Unauthorized,

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("invalid response from server: {0}")]
    Decode(String),
}

/// Error envelope the backend uses for non-2xx responses. Some endpoints say
/// `{"error": ...}`, a few say `{"message": ...}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Build an [`ApiError::Api`] from a non-2xx status and its raw body,
    /// falling back to a generic message when the body carries none.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error.or(b.message))
            .unwrap_or_else(|| format!("request failed with status {status}"));
        ApiError::Api { status, message }
    }

    /// True for a 404 on a detail fetch, so views can render a dedicated
    /// not-found state instead of a generic error banner.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Api { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_error_field_from_body() {
        let err = ApiError::from_response(400, r#"{"error": "Community name is required"}"#);
        assert_eq!(
            err,
            ApiError::Api {
                status: 400,
                message: "Community name is required".to_string()
            }
        );
        assert_eq!(err.to_string(), "Community name is required");
    }

    #[test]
    fn falls_back_to_message_field() {
        let err = ApiError::from_response(409, r#"{"message": "Already a member"}"#);
        assert_eq!(err.to_string(), "Already a member");
    }

    #[test]
    fn generic_message_for_unparseable_body() {
        let err = ApiError::from_response(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "request failed with status 502");
    }

    #[test]
    fn not_found_detection() {
        assert!(ApiError::from_response(404, r#"{"error": "Event not found"}"#).is_not_found());
        assert!(!ApiError::from_response(400, "{}").is_not_found());
        assert!(!ApiError::Unauthorized.is_not_found());
    }
}
