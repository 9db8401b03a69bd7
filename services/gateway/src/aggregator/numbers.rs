//! Sliding-window average over upstream number batches

use crate::budget::ResponseBudget;
use crate::error::AppError;
use crate::upstream::Upstream;
use crate::window::WindowStore;
use std::sync::Arc;
use tracing::{debug, info, warn};
use types::aggregate::NumbersResponse;
use types::category::NumberCategory;
use types::ids::RequestId;

pub struct NumbersAggregator {
    upstream: Arc<dyn Upstream>,
    window: WindowStore,
    budget: ResponseBudget,
}

impl NumbersAggregator {
    pub fn new(upstream: Arc<dyn Upstream>, window: WindowStore, budget: ResponseBudget) -> Self {
        Self {
            upstream,
            window,
            budget,
        }
    }

    pub fn window(&self) -> &WindowStore {
        &self.window
    }

    /// Fetch the category's latest numbers, fold them into the shared
    /// window and report the window before and after.
    ///
    /// An unavailable or timed-out upstream counts as an empty batch and is
    /// answered without a budget check. A merged result computed after the
    /// budget ran out is discarded, but its merge stays applied.
    #[tracing::instrument(
        name = "numbers",
        skip(self, token),
        fields(request_id = %RequestId::new())
    )]
    pub async fn handle(
        &self,
        category_id: &str,
        token: Option<&str>,
    ) -> Result<NumbersResponse, AppError> {
        let clock = self.budget.start();
        let category: NumberCategory = category_id.parse()?;

        let fetched = match self.upstream.fetch_numbers(category, token).await {
            Ok(values) => values,
            Err(err) => {
                warn!(%category, error = %err, "upstream unavailable, no new numbers");
                Vec::new()
            }
        };

        let transition = self.window.apply(&fetched);
        debug!(before = ?transition.before, after = ?transition.after, "window merged");

        // An empty batch left the window untouched and is reported as is
        if !fetched.is_empty() {
            clock
                .check()
                .inspect_err(|err| warn!(error = %err, "discarding numbers result"))?;
        }

        info!(
            %category,
            fetched = fetched.len(),
            avg = transition.average,
            elapsed_ms = clock.elapsed().as_millis() as u64,
            "numbers aggregated"
        );

        Ok(NumbersResponse {
            window_prev_state: transition.before,
            window_curr_state: transition.after,
            numbers: fetched,
            avg: transition.average,
        })
    }
}
