use crate::constants::{DEFAULT_CURRENCY_SUFFIX, DEFAULT_TRANSFER_THRESHOLD};
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    /// When set, the ledger is persisted as a JSON snapshot at this path.
    pub snapshot_path: Option<PathBuf>,
    pub transfer_threshold: f64,
    pub currency_suffix: String,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            snapshot_path: env::var("SNAPSHOT_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            transfer_threshold: env::var("TRANSFER_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &f64| v.is_finite() && *v >= 0.0)
                .unwrap_or(DEFAULT_TRANSFER_THRESHOLD),
            currency_suffix: env::var("CURRENCY_SUFFIX").unwrap_or_else(|_| DEFAULT_CURRENCY_SUFFIX.to_string()),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
