//! Domain-level error payload.
//!
//! The aggregation pipeline normalizes every failure into [`ApiError`]
//! before it reaches an inbound adapter; transport-specific concerns (HTTP
//! status selection, response body) live at the edge.

use serde::{Deserialize, Serialize};

const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Structured failure carried from the aggregation core to inbound adapters.
///
/// ## Invariants
/// - `status` is the upstream-derived status code when one is known, 500
///   otherwise. Out-of-range values are preserved here and clamped by the
///   inbound adapter when the response status line is built.
///
/// # Examples
/// ```
/// use gateway::domain::ApiError;
///
/// let error = ApiError::user_not_found();
/// assert_eq!(error.status(), 404);
/// assert_eq!(error.message(), "User not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiError {
    #[schema(example = 404)]
    status: u16,
    #[schema(example = "User not found")]
    message: String,
}

impl ApiError {
    /// Create an error from a status code and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Error produced when the user-existence probe reports a missing user.
    pub fn user_not_found() -> Self {
        Self::new(404, USER_NOT_FOUND_MESSAGE)
    }

    /// Status code associated with this failure.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    //! Regression coverage for the error payload contract.

    use serde_json::json;

    use super::*;

    #[test]
    fn user_not_found_uses_the_fixed_status_and_message() {
        let error = ApiError::user_not_found();
        assert_eq!(error.status(), 404);
        assert_eq!(error.message(), "User not found");
    }

    #[test]
    fn serializes_to_the_external_error_envelope() {
        let error = ApiError::new(503, "Failed to retrieve branches: status 503");
        let value = serde_json::to_value(&error).expect("error serializes");
        assert_eq!(
            value,
            json!({ "status": 503, "message": "Failed to retrieve branches: status 503" })
        );
    }

    #[test]
    fn display_exposes_the_message_only() {
        let error = ApiError::new(500, "boom");
        assert_eq!(error.to_string(), "boom");
    }
}
