use thiserror::Error;

/// Failures surfaced by the HTTP client wrapper.
///
/// `Request` is a non-2xx response and carries the server's error message
/// (or the status line when the body has none). `Transport` means no usable
/// response arrived at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{message}")]
    Request { message: String },

    #[error("network error: {0}")]
    Transport(String),
}

impl ApiError {
    pub fn request(message: impl Into<String>) -> Self {
        ApiError::Request {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::Transport(message.into())
    }
}
