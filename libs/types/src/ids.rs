//! Identifier types for gateway requests
//!
//! Request ids use UUID v7 so log lines for concurrent requests sort
//! chronologically by id.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum accepted ticker length
pub const MAX_TICKER_LEN: usize = 16;

/// Unique identifier for a single inbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Create a new RequestId with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stock ticker symbol
///
/// 1 to 16 ASCII characters: letters, digits, `.` and `-`
/// (e.g., "NVDA", "BRK.B", "RDS-A").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Validate and wrap a ticker symbol
    pub fn try_new(symbol: impl Into<String>) -> Result<Self, ValidationError> {
        let s = symbol.into();
        let well_formed = !s.is_empty()
            && s.len() <= MAX_TICKER_LEN
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');

        if well_formed {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidTicker(s))
        }
    }

    /// Get the symbol string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
