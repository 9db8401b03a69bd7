//! Price entries returned by the upstream stock service
//!
//! The upstream answers either with a list of entries or with a single
//! entry wrapped as `{"stock": {...}}`. Entries are kept only when they
//! carry both a numeric `price` and a string `lastUpdatedAt`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One observed price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub price: f64,
    /// Observation timestamp, kept verbatim as sent by the upstream
    pub last_updated_at: String,
}

impl PriceEntry {
    /// Read an entry from a raw upstream object, None if a field is missing
    /// or has the wrong type.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        let price = raw.get("price")?.as_f64()?;
        let last_updated_at = raw.get("lastUpdatedAt")?.as_str()?;
        Some(Self {
            price,
            last_updated_at: last_updated_at.to_string(),
        })
    }
}

/// Flatten either upstream payload shape into a list of raw entries.
///
/// An object without a `stock` key yields one empty entry, which fails
/// validation downstream. Any other JSON value yields no entries.
pub fn normalize_history(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(entries) => entries,
        Value::Object(mut obj) => {
            vec![obj.remove("stock").unwrap_or_else(|| Value::Object(Map::new()))]
        }
        _ => Vec::new(),
    }
}

/// Keep the well-formed entries, preserving upstream order.
pub fn valid_entries(raw: &[Value]) -> Vec<PriceEntry> {
    raw.iter().filter_map(PriceEntry::from_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_list_payload() {
        let payload = json!([
            {"price": 1.0, "lastUpdatedAt": "2025-05-08T04:11:42.465706306Z"},
            {"price": 2.0, "lastUpdatedAt": "2025-05-08T04:12:42.465706306Z"}
        ]);
        assert_eq!(normalize_history(payload).len(), 2);
    }

    #[test]
    fn test_normalize_single_stock_payload() {
        let payload = json!({"stock": {"price": 42.5, "lastUpdatedAt": "2025-05-08T04:11:42Z"}});
        let entries = valid_entries(&normalize_history(payload));
        assert_eq!(
            entries,
            vec![PriceEntry {
                price: 42.5,
                last_updated_at: "2025-05-08T04:11:42Z".to_string(),
            }]
        );
    }

    #[test]
    fn test_normalize_object_without_stock_key() {
        let raw = normalize_history(json!({"unexpected": true}));
        assert_eq!(raw.len(), 1);
        assert!(valid_entries(&raw).is_empty());
    }

    #[test]
    fn test_normalize_scalar_payload() {
        assert!(normalize_history(json!("oops")).is_empty());
        assert!(normalize_history(Value::Null).is_empty());
    }

    #[test]
    fn test_valid_entries_filters_incomplete() {
        let raw = vec![
            json!({"price": 100.0}),
            json!({"price": 250.5, "lastUpdatedAt": "t1"}),
            json!({"lastUpdatedAt": "t2"}),
            json!({"price": "cheap", "lastUpdatedAt": "t3"}),
            json!({"price": 7, "lastUpdatedAt": "t4"}),
        ];
        let entries = valid_entries(&raw);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].price, 250.5);
        assert_eq!(entries[1].price, 7.0);
        assert_eq!(entries[1].last_updated_at, "t4");
    }

    #[test]
    fn test_price_entry_wire_format() {
        let entry = PriceEntry {
            price: 231.95,
            last_updated_at: "2025-05-08T04:11:42Z".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, json!({"price": 231.95, "lastUpdatedAt": "2025-05-08T04:11:42Z"}));
    }
}
