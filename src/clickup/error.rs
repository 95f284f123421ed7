//! ClickUp API-specific error types.

/// Errors that can occur during ClickUp API operations.
#[derive(Debug, thiserror::Error)]
pub enum ClickUpError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to decode API response body
    #[error("Failed to decode API response: {0}")]
    Json(#[from] serde_json::Error),

    /// Response envelope lacked the expected array
    #[error("Response from {endpoint} is missing the '{key}' array")]
    MissingKey { key: String, endpoint: String },

    /// A record lacked a required identifier
    #[error("Record is missing required field '{field}'")]
    MissingField { field: &'static str },
}
