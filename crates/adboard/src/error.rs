use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdboardError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Ad not found: {0}")]
    AdNotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

/// Coarse classification used by clients to pick a status and a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Unauthorized,
    StoreUnavailable,
}

impl AdboardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdboardError::BadRequest(_) => ErrorKind::BadRequest,
            AdboardError::AdNotFound(_) => ErrorKind::NotFound,
            AdboardError::Unauthorized(_) => ErrorKind::Unauthorized,
            AdboardError::Io(_) | AdboardError::Serialization(_) | AdboardError::Store(_) => {
                ErrorKind::StoreUnavailable
            }
        }
    }

    /// HTTP-equivalent status for this error.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::StoreUnavailable => 500,
        }
    }

    pub fn is_store_failure(&self) -> bool {
        self.kind() == ErrorKind::StoreUnavailable
    }

    /// Message safe to hand to a client. Store failures collapse to a generic
    /// text so paths and parser output never leave the process.
    pub fn public_message(&self) -> String {
        match self {
            AdboardError::BadRequest(msg) | AdboardError::Unauthorized(msg) => msg.clone(),
            AdboardError::AdNotFound(_) => "Ad not found".to_string(),
            _ => "Internal error".to_string(),
        }
    }

    pub(crate) fn bad_request(msg: impl Into<String>) -> Self {
        AdboardError::BadRequest(msg.into())
    }

    pub(crate) fn unauthorized(msg: impl Into<String>) -> Self {
        AdboardError::Unauthorized(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AdboardError>;
