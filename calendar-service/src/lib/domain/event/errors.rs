use thiserror::Error;

/// Top-level error for event operations
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for EventError {
    fn from(err: anyhow::Error) -> Self {
        EventError::Unknown(err.to_string())
    }
}
