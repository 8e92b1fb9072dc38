use thiserror::Error;

/// Error type for password operations.
///
/// Verification never fails: a malformed digest is reported as a mismatch.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
