//! Client for the upstream test service
//!
//! One GET per call, bounded by the client timeout, no retries. Whether a
//! failure is fatal is decided by the caller.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use types::category::NumberCategory;
use types::ids::Ticker;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("upstream timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("upstream responded with status {0}")]
    Status(u16),

    #[error("invalid upstream body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else if err.is_decode() {
            UpstreamError::Decode(err.to_string())
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}

/// Data provider behind the gateway
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Latest batch of numbers for a category
    async fn fetch_numbers(
        &self,
        category: NumberCategory,
        token: Option<&str>,
    ) -> Result<Vec<i64>, UpstreamError>;

    /// Raw price history payload for a ticker over the trailing `minutes`
    async fn fetch_prices(
        &self,
        ticker: &Ticker,
        minutes: u64,
        token: Option<&str>,
    ) -> Result<Value, UpstreamError>;
}

#[derive(Debug, Deserialize)]
struct NumbersPayload {
    #[serde(default)]
    numbers: Vec<i64>,
}

/// reqwest-backed upstream
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
    numbers_base_url: String,
    stocks_base_url: String,
}

impl HttpUpstream {
    pub fn new(
        numbers_base_url: &str,
        stocks_base_url: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            numbers_base_url: numbers_base_url.trim_end_matches('/').to_string(),
            stocks_base_url: stocks_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&str>,
    ) -> Result<T, UpstreamError> {
        let mut request = self.client.get(url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let res = request.send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        Ok(res.json::<T>().await?)
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn fetch_numbers(
        &self,
        category: NumberCategory,
        token: Option<&str>,
    ) -> Result<Vec<i64>, UpstreamError> {
        let url = format!("{}/{}", self.numbers_base_url, category.upstream_path());
        let payload: NumbersPayload = self.get_json(&url, token).await?;
        Ok(payload.numbers)
    }

    async fn fetch_prices(
        &self,
        ticker: &Ticker,
        minutes: u64,
        token: Option<&str>,
    ) -> Result<Value, UpstreamError> {
        let url = format!("{}/{}?minutes={}", self.stocks_base_url, ticker, minutes);
        self.get_json(&url, token).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, timeout: Duration) -> HttpUpstream {
        HttpUpstream::new(
            &server.uri(),
            &format!("{}/stocks/", server.uri()),
            timeout,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_numbers_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/even"))
            .and(header("Authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"numbers": [2, 4, 6, 8]})))
            .expect(1)
            .mount(&server)
            .await;

        let upstream = client_for(&server, Duration::from_millis(500));
        let numbers = upstream
            .fetch_numbers(NumberCategory::Even, Some("secret-token"))
            .await
            .unwrap();

        assert_eq!(numbers, vec![2, 4, 6, 8]);
    }

    #[tokio::test]
    async fn test_fetch_numbers_without_token_sends_no_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/primes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"numbers": [2, 3, 5]})))
            .mount(&server)
            .await;

        let upstream = client_for(&server, Duration::from_millis(500));
        let numbers = upstream
            .fetch_numbers(NumberCategory::Prime, None)
            .await
            .unwrap();
        assert_eq!(numbers, vec![2, 3, 5]);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_fetch_numbers_missing_key_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rand"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let upstream = client_for(&server, Duration::from_millis(500));
        let numbers = upstream
            .fetch_numbers(NumberCategory::Random, None)
            .await
            .unwrap();
        assert!(numbers.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fibo"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let upstream = client_for(&server, Duration::from_millis(500));
        let err = upstream
            .fetch_numbers(NumberCategory::Fibonacci, None)
            .await
            .unwrap_err();
        assert_eq!(err, UpstreamError::Status(503));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/even"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"numbers": [2]}))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;

        let upstream = client_for(&server, Duration::from_millis(50));
        let err = upstream
            .fetch_numbers(NumberCategory::Even, None)
            .await
            .unwrap_err();
        assert_eq!(err, UpstreamError::Timeout);
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/even"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let upstream = client_for(&server, Duration::from_millis(500));
        let err = upstream
            .fetch_numbers(NumberCategory::Even, None)
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_prices_passes_minutes() {
        let server = MockServer::start().await;
        let body = json!([{"price": 231.95, "lastUpdatedAt": "2025-05-08T04:11:42Z"}]);
        Mock::given(method("GET"))
            .and(path("/stocks/NVDA"))
            .and(query_param("minutes", "50"))
            .and(header("Authorization", "Bearer t"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let upstream = client_for(&server, Duration::from_millis(500));
        let ticker = Ticker::try_new("NVDA").unwrap();
        let payload = upstream.fetch_prices(&ticker, 50, Some("t")).await.unwrap();
        assert_eq!(payload, body);
    }
}
