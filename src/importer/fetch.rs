use crate::importer::ImportError;
use reqwest::blocking::Client;
use std::fs;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("listing_search/", env!("CARGO_PKG_VERSION"));

/// Reads the page at `source`: fetched when it is an http(s) URL,
/// otherwise read from the local filesystem.
pub fn load_page(source: &str) -> Result<String, ImportError> {
    match Url::parse(source) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => fetch(url),
        _ => fs::read_to_string(source).map_err(|e| ImportError::Io(format!("{source}: {e}"))),
    }
}

fn fetch(url: Url) -> Result<String, ImportError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| ImportError::Network(e.to_string()))?;

    tracing::debug!(%url, "fetching listing page");

    let resp = client
        .get(url.clone())
        .send()
        .map_err(|e| ImportError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ImportError::Network(format!("{url} returned {status}")));
    }

    resp.text().map_err(|e| ImportError::Network(e.to_string()))
}
