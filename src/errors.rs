use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    // Local precondition failure; no request was sent.
    #[error("{0}")]
    InvalidInput(String),

    // The server explicitly declined (wrong token, already marked, closed).
    #[error("{0}")]
    Rejected(String),

    #[error("your session has expired, please log in again")]
    AuthExpired,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
