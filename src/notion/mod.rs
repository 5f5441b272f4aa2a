mod client;
pub mod fields;
mod models;
mod notion_error;

pub use client::NotionClient;
pub use models::{Page, QueryResponse};
pub use notion_error::NotionError;
