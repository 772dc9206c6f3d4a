use thiserror::Error;

use crate::types::error_types::ErrorBody;

/// A unified error type for this library.
#[derive(Debug, Error)]
pub enum LostFoundError {
    /// HTTP request failed (network or protocol issue).
    #[error("Reqwest Error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    /// The server rejected the request and we parsed its error body.
    #[error("API Error: {}", .0.error)]
    ApiError(ErrorBody),

    /// The server returned an error code with a body we couldn't parse as
    /// the standard `{"error": ...}` envelope. Contains the HTTP status
    /// code and raw body.
    #[error("Non-success HTTP status {code}, body: {body}")]
    HttpStatus { code: u16, body: String },

    /// Serde (de)serialization error.
    #[error("Serde JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),

    // Other
    #[error("Other error: {0}")]
    Other(String),
}

/// Convert the backend's error envelope into a [`LostFoundError::ApiError`].
pub fn handle_api_error(err: ErrorBody) -> LostFoundError {
    LostFoundError::ApiError(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_the_backend_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "Email and password are required"}"#).unwrap();
        let err = handle_api_error(body);
        assert_eq!(err.to_string(), "API Error: Email and password are required");
    }
}
