// config.rs
use crate::errors::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_DATASET: &str = "immobilien.json";
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_WORKERS: usize = 8;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Relative path or http(s) URL of the listing dataset.
    pub dataset: String,
    pub addr: SocketAddr,
    pub max_workers: usize,
    /// Only applies to HTTP datasets. `None` keeps the client default.
    pub fetch_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`], but reading from any lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dataset = lookup("IMMO_DATASET")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATASET.to_string());

        let addr_raw = lookup("IMMO_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            name: "IMMO_ADDR",
            value: addr_raw.clone(),
            reason: e.to_string(),
        })?;

        let max_workers = match lookup("IMMO_WORKERS") {
            None => DEFAULT_WORKERS,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "IMMO_WORKERS",
                        value: raw,
                        reason: "expected a positive integer".into(),
                    })
                }
            },
        };

        let fetch_timeout = match lookup("IMMO_FETCH_TIMEOUT_SECS") {
            None => None,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        name: "IMMO_FETCH_TIMEOUT_SECS",
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
        };

        Ok(Self {
            dataset,
            addr,
            max_workers,
            fetch_timeout,
        })
    }
}
