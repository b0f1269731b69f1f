//! Site configuration parsed from environment variables.

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://web-production-43694.up.railway.app/api/v1";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const DEFAULT_AUTH_APP_URL: &str = "https://app.propthinks.com";
pub const DEFAULT_STORAGE_BASE_URL: &str =
    "https://vlyxfxkhpqtabrmbmsxu.supabase.co/storage/v1/object/public/property-photos";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DATABASE_PATH: &str = "propthinks.sqlite3";
pub const DEFAULT_MAX_WORKERS: usize = 8;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RATE_LIMIT_PER_CLIENT: usize = 10;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("APP_ENV must be development, production or test (got {0})")]
    InvalidEnv(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl AppEnv {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw {
            "development" => Ok(AppEnv::Development),
            "production" => Ok(AppEnv::Production),
            "test" => Ok(AppEnv::Test),
            other => Err(ConfigError::InvalidEnv(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Url,
    pub site_url: Url,
    pub auth_app_url: Url,
    pub storage_base_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub database_path: String,
    pub env: AppEnv,
    pub api_timeout: Duration,
    pub rate_limit_per_client: usize,
    pub rate_limit_window: Duration,
    /// Take the client address from `X-Forwarded-For` (behind a proxy).
    pub trust_proxy: bool,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// All variables are optional:
    /// - `API_BASE_URL`, `SITE_URL`, `AUTH_APP_URL`, `STORAGE_BASE_URL`
    /// - `BIND_ADDR` (default `127.0.0.1:3000`), `MAX_WORKERS` (default 8)
    /// - `DATABASE_PATH` (default `propthinks.sqlite3`)
    /// - `APP_ENV`: `development` (default), `production` or `test`
    /// - `API_TIMEOUT_SECS` (default 30)
    /// - `RATE_LIMIT_PER_CLIENT` (default 10), `RATE_LIMIT_WINDOW_SECS` (default 60)
    /// - `TRUST_PROXY`: `true`/`1` to read the client address from `X-Forwarded-For`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_raw = get("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidAddr {
            var: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let storage_base_url = get("STORAGE_BASE_URL", DEFAULT_STORAGE_BASE_URL);
        parse_url("STORAGE_BASE_URL", &storage_base_url)?;

        Ok(Self {
            api_base_url: parse_url("API_BASE_URL", &get("API_BASE_URL", DEFAULT_API_BASE_URL))?,
            site_url: parse_url("SITE_URL", &get("SITE_URL", DEFAULT_SITE_URL))?,
            auth_app_url: parse_url("AUTH_APP_URL", &get("AUTH_APP_URL", DEFAULT_AUTH_APP_URL))?,
            storage_base_url: storage_base_url.trim_end_matches('/').to_string(),
            bind_addr,
            max_workers: positive_or(lookup("MAX_WORKERS"), DEFAULT_MAX_WORKERS),
            database_path: get("DATABASE_PATH", DEFAULT_DATABASE_PATH),
            env: AppEnv::parse(&get("APP_ENV", "development"))?,
            api_timeout: Duration::from_secs(parse_or(
                lookup("API_TIMEOUT_SECS"),
                DEFAULT_API_TIMEOUT_SECS,
            )),
            rate_limit_per_client: positive_or(
                lookup("RATE_LIMIT_PER_CLIENT"),
                DEFAULT_RATE_LIMIT_PER_CLIENT,
            ),
            rate_limit_window: Duration::from_secs(parse_or(
                lookup("RATE_LIMIT_WINDOW_SECS"),
                DEFAULT_RATE_LIMIT_WINDOW_SECS,
            )),
            trust_proxy: matches!(
                lookup("TRUST_PROXY").as_deref().map(str::trim),
                Some("1" | "true" | "yes")
            ),
        })
    }

    pub fn secure_cookies(&self) -> bool {
        self.env == AppEnv::Production
    }
}

/// Base URLs get a trailing slash so `Url::join` appends instead of replacing
/// the last path segment.
fn parse_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized).map_err(|_| ConfigError::InvalidUrl {
        var,
        value: raw.to_string(),
    })
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

/// Zero is treated as unset.
fn positive_or(raw: Option<String>, default: usize) -> usize {
    match parse_or(raw, default) {
        0 => default,
        n => n,
    }
}
