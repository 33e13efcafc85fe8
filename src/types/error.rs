use thiserror::Error;

/// vacstat error types
#[derive(Error, Debug)]
pub enum VacstatError {
    /// HTTP transport failure (network error or non-success status)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to decode a response body
    #[error("decode error: {0}")]
    Decode(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for vacstat
pub type Result<T> = std::result::Result<T, VacstatError>;
