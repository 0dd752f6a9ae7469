use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PushError {
    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(String),

    #[error("failed to build http client: {0}")]
    Client(String),

    /// The endpoint answered with a 4xx or 5xx status.
    #[error("{code} {reason}")]
    Status { code: u16, reason: String },

    #[error("{0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,
}
