use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum NotionError {
    Network(String),
    Api(u16, String),
    Decode(String),
}

impl fmt::Display for NotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotionError::Network(msg) => write!(f, "Network error: {msg}"),
            NotionError::Api(status, msg) => write!(f, "Notion API error {status}: {msg}"),
            NotionError::Decode(msg) => write!(f, "Unexpected Notion response: {msg}"),
        }
    }
}

impl Error for NotionError {}
