//! Error types for request validation
//!
//! Every variant is a client error: it is raised before any upstream call
//! is attempted.

use thiserror::Error;

/// Rejected request parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid number category: {0}")]
    InvalidCategory(String),

    #[error("Invalid ticker: {0}")]
    InvalidTicker(String),

    #[error("Aggregation must be 'average', got '{0}'")]
    InvalidAggregation(String),

    #[error("Minutes must be positive, got {0}")]
    InvalidWindow(i64),
}

impl ValidationError {
    /// Stable machine-readable code reported in error bodies
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidCategory(_) => "INVALID_CATEGORY",
            ValidationError::InvalidTicker(_) => "INVALID_TICKER",
            ValidationError::InvalidAggregation(_) => "INVALID_AGGREGATION",
            ValidationError::InvalidWindow(_) => "INVALID_WINDOW",
        }
    }
}
