//! Gateway configuration, loaded from environment variables.

use crate::budget::DEFAULT_BUDGET;
use crate::window::DEFAULT_WINDOW_CAPACITY;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9876";
pub const DEFAULT_NUMBERS_URL: &str = "http://20.244.56.144/evaluation-service";
pub const DEFAULT_STOCKS_URL: &str = "http://20.244.56.144/evaluation-service/stocks";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Bearer token presented to the upstream
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    /// Empty tokens are treated as absent.
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = if self.token.is_some() { "[REDACTED]" } else { "<none>" };
        f.debug_struct("Credentials").field("token", &token).finish()
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// `GATEWAY_BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `UPSTREAM_NUMBERS_URL`
    pub numbers_base_url: String,
    /// `UPSTREAM_STOCKS_URL`
    pub stocks_base_url: String,
    /// `UPSTREAM_TOKEN`
    pub credentials: Credentials,
    /// `RESPONSE_BUDGET_MS`; also the upstream timeout
    pub response_budget: Duration,
    /// `WINDOW_CAPACITY`
    pub window_capacity: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 9876)),
            numbers_base_url: DEFAULT_NUMBERS_URL.to_string(),
            stocks_base_url: DEFAULT_STOCKS_URL.to_string(),
            credentials: Credentials::default(),
            response_budget: DEFAULT_BUDGET,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup("GATEWAY_BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "GATEWAY_BIND_ADDR",
                value: raw,
            })?,
            None => defaults.bind_addr,
        };

        let response_budget = match parse_positive(&lookup, "RESPONSE_BUDGET_MS")? {
            Some(ms) => Duration::from_millis(ms),
            None => defaults.response_budget,
        };

        let window_capacity = match parse_positive(&lookup, "WINDOW_CAPACITY")? {
            Some(capacity) => capacity as usize,
            None => defaults.window_capacity,
        };

        Ok(Self {
            bind_addr,
            numbers_base_url: lookup("UPSTREAM_NUMBERS_URL").unwrap_or(defaults.numbers_base_url),
            stocks_base_url: lookup("UPSTREAM_STOCKS_URL").unwrap_or(defaults.stocks_base_url),
            credentials: Credentials::new(lookup("UPSTREAM_TOKEN")),
            response_budget,
            window_capacity,
        })
    }
}

fn parse_positive<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(ConfigError::InvalidValue { key, value: raw }),
    }
}
