use thiserror::Error;

/// Failures reported by the remote scheduling authority.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Calendar state error: {0}")]
    State(String),

    #[error("Unexpected status {status} returned by {operation}")]
    Protocol { operation: String, status: u16 },

    #[error("Capacity error: {0}")]
    Capacity(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn protocol(operation: &str, status: u16) -> Self {
        ApiError::Protocol {
            operation: operation.to_string(),
            status,
        }
    }
}
