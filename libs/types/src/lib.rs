//! Types library for the average gateway
//!
//! This library provides the domain types shared by the gateway service:
//! validated request parameters, upstream payload normalization, response
//! payloads and the rounding rule applied to every reported average.
//!
//! # Modules
//! - `ids`: Identifiers (RequestId, Ticker)
//! - `numeric`: Average computation and 2-decimal rounding
//! - `category`: Number categories served by the upstream
//! - `price`: Price entries and stock payload normalization
//! - `aggregate`: Aggregation modes and response payloads
//! - `errors`: Validation error taxonomy

// Public modules
pub mod ids;
pub mod numeric;
pub mod category;
pub mod price;
pub mod aggregate;
pub mod errors;

