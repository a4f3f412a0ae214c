// config.rs
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DB: &str = "listings.sqlite3";
pub const DEFAULT_SCHEMA: &str = "sql/schema.sql";
pub const DEFAULT_WORKERS: usize = 8;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings, read from `LISTINGS_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    /// Listing page (path or URL) imported before serving.
    pub seed: Option<String>,
    pub workers: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr_raw = get("LISTINGS_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            name: "LISTINGS_ADDR",
            value: addr_raw.clone(),
            reason: format!("{e}"),
        })?;

        let workers = match get("LISTINGS_WORKERS") {
            None => DEFAULT_WORKERS,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        name: "LISTINGS_WORKERS",
                        value: raw,
                        reason: "must be at least 1".into(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        name: "LISTINGS_WORKERS",
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
        };

        Ok(Self {
            addr,
            db_path: get("LISTINGS_DB").unwrap_or_else(|| DEFAULT_DB.to_string()),
            schema_path: get("LISTINGS_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.to_string()),
            seed: get("LISTINGS_SEED"),
            workers,
        })
    }
}
