//! Average stock price over a trailing time window

use crate::budget::ResponseBudget;
use crate::error::AppError;
use crate::upstream::Upstream;
use std::sync::Arc;
use tracing::{info, warn};
use types::aggregate::{Aggregation, StockAverageResponse};
use types::errors::ValidationError;
use types::ids::{RequestId, Ticker};
use types::numeric::average_of_floats;
use types::price::{normalize_history, valid_entries};

pub struct StockAggregator {
    upstream: Arc<dyn Upstream>,
    budget: ResponseBudget,
}

impl StockAggregator {
    pub fn new(upstream: Arc<dyn Upstream>, budget: ResponseBudget) -> Self {
        Self { upstream, budget }
    }

    #[tracing::instrument(
        name = "stocks",
        skip(self, token),
        fields(request_id = %RequestId::new())
    )]
    pub async fn handle(
        &self,
        ticker: &str,
        minutes: i64,
        aggregation: &str,
        token: Option<&str>,
    ) -> Result<StockAverageResponse, AppError> {
        let clock = self.budget.start();

        let mode: Aggregation = aggregation.parse()?;
        if minutes <= 0 {
            return Err(ValidationError::InvalidWindow(minutes).into());
        }
        let ticker = Ticker::try_new(ticker)?;

        let payload = self
            .upstream
            .fetch_prices(&ticker, minutes.unsigned_abs(), token)
            .await
            .inspect_err(|err| warn!(%ticker, error = %err, "price history unavailable"))?;

        let price_history = valid_entries(&normalize_history(payload));
        if price_history.is_empty() {
            return Err(AppError::NoValidData);
        }

        let prices: Vec<f64> = price_history.iter().map(|entry| entry.price).collect();
        let average_stock_price = match mode {
            Aggregation::Average => average_of_floats(&prices),
        };

        let elapsed = clock
            .check()
            .inspect_err(|err| warn!(%ticker, error = %err, "discarding stock result"))?;

        info!(
            %ticker,
            minutes,
            entries = price_history.len(),
            average = average_stock_price,
            elapsed_ms = elapsed.as_millis() as u64,
            "stock price aggregated"
        );

        Ok(StockAverageResponse {
            average_stock_price,
            price_history,
        })
    }
}
