use crate::config::AppConfig;
use crate::notion::NotionClient;
use crate::router::{handle, AppContext};
use astra::Server;
use std::net::SocketAddr;

mod config;
mod domain;
mod errors;
mod notion;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Read the Notion credentials from the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the shared Notion client
    let notion = match NotionClient::new(config.notion_token) {
        Ok(notion) => notion,
        Err(e) => {
            eprintln!("❌ Notion client setup failed: {e}");
            std::process::exit(1);
        }
    };

    let ctx = AppContext {
        notion,
        database_id: config.database_id,
    };

    // 3️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests, passing the context into the closure
    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
