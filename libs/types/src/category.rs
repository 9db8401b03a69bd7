//! Number categories served by the upstream test service

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of numbers to fetch, addressed by a single-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberCategory {
    Prime,
    Fibonacci,
    Even,
    Random,
}

impl NumberCategory {
    pub const ALL: [NumberCategory; 4] = [
        NumberCategory::Prime,
        NumberCategory::Fibonacci,
        NumberCategory::Even,
        NumberCategory::Random,
    ];

    /// Single-letter code used in `/numbers/{code}`
    pub fn code(&self) -> &'static str {
        match self {
            NumberCategory::Prime => "p",
            NumberCategory::Fibonacci => "f",
            NumberCategory::Even => "e",
            NumberCategory::Random => "r",
        }
    }

    /// Path segment of this category under the upstream numbers base URL
    pub fn upstream_path(&self) -> &'static str {
        match self {
            NumberCategory::Prime => "primes",
            NumberCategory::Fibonacci => "fibo",
            NumberCategory::Even => "even",
            NumberCategory::Random => "rand",
        }
    }
}

impl FromStr for NumberCategory {
    type Err = ValidationError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "p" => Ok(NumberCategory::Prime),
            "f" => Ok(NumberCategory::Fibonacci),
            "e" => Ok(NumberCategory::Even),
            "r" => Ok(NumberCategory::Random),
            other => Err(ValidationError::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for NumberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
