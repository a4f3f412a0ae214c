use crate::config::Config;
use crate::db::{init_db, Database};
use crate::router::handle;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod importer;
mod render;
mod responses;
mod router;
mod search_form;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1️⃣ Configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Database from schema.sql
    let db = Database::new(config.db_path.clone());
    if let Err(e) = init_db(&db, &config.schema_path) {
        tracing::error!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Optional catalog import
    if let Some(seed) = &config.seed {
        match importer::import_listings(&db, seed) {
            Ok(n) => tracing::info!(source = %seed, listings = n, "✅ catalog imported"),
            Err(e) => {
                tracing::error!(source = %seed, "❌ Import failed: {e}");
                std::process::exit(1);
            }
        }
    }

    // 4️⃣ Start the server
    tracing::info!("Starting server at http://{}", config.addr);

    let server = Server::bind(&config.addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
