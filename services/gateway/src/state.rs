use crate::aggregator::{NumbersAggregator, StockAggregator};
use crate::budget::ResponseBudget;
use crate::config::{Credentials, GatewayConfig};
use crate::upstream::{HttpUpstream, Upstream};
use crate::window::WindowStore;
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub numbers: Arc<NumbersAggregator>,
    pub stocks: Arc<StockAggregator>,
    pub credentials: Credentials, // Fallback when the caller sends no bearer token
}

impl AppState {
    pub fn new(config: &GatewayConfig) -> anyhow::Result<Self> {
        let upstream = HttpUpstream::new(
            &config.numbers_base_url,
            &config.stocks_base_url,
            config.response_budget,
        )
        .context("failed to build upstream HTTP client")?;

        Ok(Self::with_upstream(Arc::new(upstream), config))
    }

    pub fn with_upstream(upstream: Arc<dyn Upstream>, config: &GatewayConfig) -> Self {
        let budget = ResponseBudget::new(config.response_budget);
        let window = WindowStore::new(config.window_capacity);

        Self {
            numbers: Arc::new(NumbersAggregator::new(upstream.clone(), window, budget)),
            stocks: Arc::new(StockAggregator::new(upstream, budget)),
            credentials: config.credentials.clone(),
        }
    }
}
