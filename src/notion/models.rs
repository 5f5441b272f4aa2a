use serde::Deserialize;
use serde_json::{Map, Value};

// Envelope of POST /v1/databases/{id}/query. One response carries up
// to `page_size` rows; `next_cursor` resumes where it left off.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<Page>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

/// A database row. Property payloads stay as raw JSON here; the
/// per-kind accessors in `fields` pull single values out of them.
#[derive(Debug, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Body the API sends alongside a non-2xx status.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}
