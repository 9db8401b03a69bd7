//! Aggregation modes and response payloads

use crate::errors::ValidationError;
use crate::price::PriceEntry;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported aggregation over a price history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    #[default]
    Average,
}

impl FromStr for Aggregation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "average" => Ok(Aggregation::Average),
            other => Err(ValidationError::InvalidAggregation(other.to_string())),
        }
    }
}

/// Response of `GET /numbers/{category}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumbersResponse {
    /// Window contents before this request's merge
    pub window_prev_state: Vec<i64>,
    /// Window contents after this request's merge
    pub window_curr_state: Vec<i64>,
    /// Values fetched from the upstream for this request, as received
    pub numbers: Vec<i64>,
    /// Average of `window_curr_state`, rounded to 2 decimals
    pub avg: f64,
}

/// Response of `GET /stocks/{ticker}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAverageResponse {
    pub average_stock_price: f64,
    pub price_history: Vec<PriceEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_aggregation_parse() {
        assert_eq!("average".parse::<Aggregation>(), Ok(Aggregation::Average));
        assert_eq!(
            "Average".parse::<Aggregation>(),
            Err(ValidationError::InvalidAggregation("Average".to_string()))
        );
        assert_eq!(Aggregation::default(), Aggregation::Average);
    }

    #[test]
    fn test_numbers_response_wire_format() {
        let response = NumbersResponse {
            window_prev_state: vec![],
            window_curr_state: vec![2, 4, 6, 8],
            numbers: vec![2, 4, 6, 8],
            avg: 5.0,
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "windowPrevState": [],
                "windowCurrState": [2, 4, 6, 8],
                "numbers": [2, 4, 6, 8],
                "avg": 5.0
            })
        );
    }

    #[test]
    fn test_stock_response_wire_format() {
        let response = StockAverageResponse {
            average_stock_price: 12.5,
            price_history: vec![PriceEntry {
                price: 12.5,
                last_updated_at: "t".to_string(),
            }],
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "averageStockPrice": 12.5,
                "priceHistory": [{"price": 12.5, "lastUpdatedAt": "t"}]
            })
        );
    }
}
