// src/config.rs
use crate::errors::ServerError;
use std::env;

/// Environment-supplied settings, read once at startup.
/// Both values are required: without them no page can render.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Notion integration token (bearer credential).
    pub notion_token: String,
    /// Id of the Notion database holding the property listings.
    pub database_id: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        let notion_token = require_var("NOTION_TOKEN")?;
        let database_id = require_var("NOTION_DATABASE_ID")?;

        Ok(Self {
            notion_token,
            database_id,
        })
    }
}

fn require_var(name: &str) -> Result<String, ServerError> {
    match env::var(name) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(ServerError::Config(format!(
            "{name} environment variable not set"
        ))),
    }
}
