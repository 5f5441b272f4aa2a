// src/notion/client.rs
use crate::domain::property::PropertyRecord;
use crate::notion::models::{ApiErrorBody, Page, QueryResponse};
use crate::notion::NotionError;
use reqwest::blocking::Client;
use serde_json::json;
use std::collections::HashSet;
use std::time::Duration;

const API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";
const PAGE_SIZE: u32 = 100;

/// Thin blocking client for the Notion REST API, shared across worker
/// threads. Holds the integration token; the database id comes in per
/// call.
#[derive(Clone)]
pub struct NotionClient {
    client: Client,
    token: String,
}

impl NotionClient {
    pub fn new(token: String) -> Result<Self, NotionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| NotionError::Network(e.to_string()))?;

        Ok(Self { client, token })
    }

    /// Fetch every row of the database and map each one to a
    /// `PropertyRecord`, in API order. The first failure aborts the
    /// whole fetch: no retry, no partial result.
    pub fn fetch_properties(&self, database_id: &str) -> Result<Vec<PropertyRecord>, NotionError> {
        let pages = self.query_database(database_id)?;
        Ok(pages.iter().map(PropertyRecord::from_page).collect())
    }

    /// Collect all result batches of a database query, following
    /// `next_cursor` until the API reports nothing more.
    pub fn query_database(&self, database_id: &str) -> Result<Vec<Page>, NotionError> {
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;
        let mut seen_cursors = HashSet::new();
        let mut batch = 1;

        loop {
            let resp = self.query_batch(database_id, cursor.as_deref())?;
            eprintln!(
                "📄 Notion batch {batch}: {} rows (has_more: {})",
                resp.results.len(),
                resp.has_more
            );
            pages.extend(resp.results);

            if !resp.has_more {
                break;
            }

            let next = match resp.next_cursor {
                Some(next) => next,
                // has_more without a cursor leaves nothing to request.
                None => break,
            };
            if !seen_cursors.insert(next.clone()) {
                eprintln!("🔁 Cursor already seen, stopping");
                break;
            }

            cursor = Some(next);
            batch += 1;
        }

        Ok(pages)
    }

    fn query_batch(
        &self,
        database_id: &str,
        cursor: Option<&str>,
    ) -> Result<QueryResponse, NotionError> {
        let mut body = json!({ "page_size": PAGE_SIZE });
        if let Some(cursor) = cursor {
            body["start_cursor"] = json!(cursor);
        }

        let resp = self
            .client
            .post(format!("{API_BASE}/databases/{database_id}/query"))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .map_err(|e| NotionError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| NotionError::Network(e.to_string()))?;

        if !status.is_success() {
            // Notion error bodies carry a machine code next to the message.
            let detail = match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(err) => format!("{} ({})", err.message, err.code),
                Err(_) => text,
            };
            return Err(NotionError::Api(status.as_u16(), detail));
        }

        serde_json::from_str(&text).map_err(|e| NotionError::Decode(e.to_string()))
    }
}
