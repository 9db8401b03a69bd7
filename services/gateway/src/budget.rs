//! End-to-end response time budget
//!
//! Measured with tokio's clock so paused-time tests can drive it.

use crate::error::AppError;
use std::time::Duration;
use tokio::time::Instant;

/// Default end-to-end budget, also used as the upstream timeout
pub const DEFAULT_BUDGET: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseBudget {
    limit: Duration,
}

impl ResponseBudget {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Start timing one request
    pub fn start(&self) -> BudgetClock {
        BudgetClock {
            started: Instant::now(),
            limit: self.limit,
        }
    }
}

impl Default for ResponseBudget {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BudgetClock {
    started: Instant,
    limit: Duration,
}

impl BudgetClock {
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Fails with `SlowResponse` once elapsed time is strictly over the limit.
    /// The reported elapsed time is rounded up to whole milliseconds.
    pub fn check(&self) -> Result<Duration, AppError> {
        let elapsed = self.elapsed();
        if elapsed > self.limit {
            return Err(AppError::SlowResponse {
                elapsed_ms: elapsed.as_micros().div_ceil(1000),
                budget_ms: self.limit.as_millis(),
            });
        }
        Ok(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_within_budget() {
        let clock = ResponseBudget::default().start();
        tokio::time::advance(Duration::from_millis(499)).await;
        assert_eq!(clock.check().unwrap(), Duration::from_millis(499));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exactly_at_limit_passes() {
        let clock = ResponseBudget::new(Duration::from_millis(100)).start();
        tokio::time::advance(Duration::from_millis(100)).await;
        assert!(clock.check().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_over_budget_fails() {
        let clock = ResponseBudget::default().start();
        tokio::time::advance(Duration::from_millis(501)).await;
        match clock.check() {
            Err(AppError::SlowResponse {
                elapsed_ms,
                budget_ms,
            }) => {
                assert_eq!(elapsed_ms, 501);
                assert_eq!(budget_ms, 500);
            }
            other => panic!("expected SlowResponse, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_sub_millisecond_overrun_reports_above_budget() {
        let clock = ResponseBudget::default().start();
        tokio::time::advance(Duration::from_micros(500_300)).await;
        let err = clock.check().unwrap_err();
        assert!(matches!(
            err,
            AppError::SlowResponse {
                elapsed_ms: 501,
                budget_ms: 500
            }
        ));
        assert_eq!(
            err.to_string(),
            "Response time exceeded 500 ms (took 501 ms)"
        );
    }
}
