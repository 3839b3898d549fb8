use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{message} (status {status})")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// Text shown to the user; the server's `error` field when there is one.
    pub fn message(&self) -> String {
        match self {
            ClientError::NotFound(m) => m.clone(),
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
