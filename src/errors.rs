// errors.rs
use crate::notion::NotionError;
use astra::Response;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad query input) or the upstream Notion fetch.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Config(String),
    Upstream(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            ServerError::Upstream(msg) => write!(f, "Upstream Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<NotionError> for ServerError {
    fn from(err: NotionError) -> Self {
        ServerError::Upstream(err.to_string())
    }
}
