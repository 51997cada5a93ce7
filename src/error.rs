use thiserror::Error;

/// Failures of the remote generation call.
///
/// A missing credential is not an error: the client returns `Ok(None)` and the
/// caller falls back to templates.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP 429
    #[error("RATE_LIMIT: Rate limit exceeded.")]
    RateLimited,

    /// HTTP 400
    #[error("INVALID_REQUEST: Invalid API key or request format.")]
    InvalidRequest,

    /// HTTP 403
    #[error("FORBIDDEN: Your API key does not have access.")]
    Forbidden,

    /// HTTP 500
    #[error("SERVER_ERROR: Gemini server error.")]
    ServerError,

    /// Any other non-success status, with the service's message or the status text.
    #[error("API_ERROR: {0}")]
    Generic(String),

    /// Success status but no text in the response envelope.
    #[error("Empty API response")]
    EmptyResponse,

    /// Connection, timeout or body decoding failure.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Maps a non-success status to its error, `message` covering the rest.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            429 => Self::RateLimited,
            400 => Self::InvalidRequest,
            403 => Self::Forbidden,
            500 => Self::ServerError,
            _ => Self::Generic(message.into()),
        }
    }
}

/// Failures reading or writing persisted state.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;
