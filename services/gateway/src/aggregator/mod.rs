//! Request aggregators
//!
//! Both follow the same flow: validate, fetch once from the upstream, fold
//! the result into an aggregate, then fail the request if the response
//! budget was overrun.

pub mod numbers;
pub mod stocks;

pub use numbers::NumbersAggregator;
pub use stocks::StockAggregator;
