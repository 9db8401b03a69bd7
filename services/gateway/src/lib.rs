//! Average Gateway
//!
//! Serves two aggregates over an upstream test service:
//! - `GET /numbers/{category}`: average of a process-wide sliding window of
//!   the most recent distinct numbers fetched for any category
//! - `GET /stocks/{ticker}`: average price over a trailing time window
//!
//! Every request gets one upstream call and a fixed end-to-end response
//! budget; a result computed after the budget ran out is discarded.
//!
//! # Architecture
//!
//! ```text
//!   HTTP request
//!        │
//!   ┌────▼────┐
//!   │ Router  │  ← TraceLayer, CORS, UpstreamAuth extractor
//!   └────┬────┘
//!        │
//!   ┌────┴─────────────┐
//!   │                  │
//! ┌─▼────────┐   ┌─────▼───┐
//! │ Numbers  │   │ Stocks  │  ← validate, time budget
//! └─┬──────┬─┘   └────┬────┘
//!   │      │          │
//! ┌─▼────┐ │          │
//! │Window│ │          │
//! └──────┘ │          │
//!        ┌─▼──────────▼─┐
//!        │   Upstream   │  ← single GET, client timeout
//!        └──────────────┘
//! ```

pub mod aggregator;
pub mod auth;
pub mod budget;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod upstream;
pub mod window;

pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
