use crate::domain::compare::CompareState;
use crate::errors::{ResultResp, ServerError};
use crate::notion::NotionClient;
use crate::responses::{css_response, html_response};
use crate::templates::pages::{compare_page, CompareVm};
use astra::Request;
use chrono::Utc;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Shared per-worker context. The Notion client holds a connection
/// pool internally, so cloning this is cheap.
#[derive(Clone)]
pub struct AppContext {
    pub notion: NotionClient,
    pub database_id: String,
}

pub fn handle(req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => compare_route(&req, ctx),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        _ => Err(ServerError::NotFound),
    }
}

fn compare_route(req: &Request, ctx: &AppContext) -> ResultResp {
    let state = CompareState::from_query(&parse_query(req));

    // Fetched fresh on every page load so edits in Notion show up
    // on the next refresh.
    let records = ctx.notion.fetch_properties(&ctx.database_id)?;
    eprintln!("✅ Fetched {} properties from Notion", records.len());

    let vm = CompareVm {
        records,
        state,
        fetched_at: Utc::now(),
    };

    html_response(compare_page(&vm))
}

/// Query pairs in document order. Keys repeat (`sel`, `open`), so this
/// is a Vec rather than a map.
fn parse_query(req: &Request) -> Vec<(String, String)> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => Vec::new(),
    }
}
