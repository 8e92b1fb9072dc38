use thiserror::Error;

/// Error type for token operations.
///
/// Validation failures carry detail for logging only; callers translate them
/// to a generic unauthenticated response before anything reaches a client.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),
}
