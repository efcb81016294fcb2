//! Domain models shared by the decision engine and the ledger.

pub mod decision;
pub mod ledger_entry;
pub mod profile;

pub use decision::DecisionResult;
pub use ledger_entry::{DailySeriesPoint, EntryKind, LedgerEntry, LedgerSummary};
pub use profile::UserProfile;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a number leniently: numeric strings parse, anything else
/// becomes 0. Stored ledgers come from an untrusted edge, so malformed
/// values degrade to a safe default instead of failing the whole read.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(f64_from_value(&value))
}

pub(crate) fn f64_from_value(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    };
    if raw.is_finite() {
        raw
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_f64_from_value_accepts_numbers_and_numeric_strings() {
        assert_eq!(f64_from_value(&json!(12.5)), 12.5);
        assert_eq!(f64_from_value(&json!("12.5")), 12.5);
        assert_eq!(f64_from_value(&json!(" 42 ")), 42.0);
    }

    #[test]
    fn test_f64_from_value_defaults_garbage_to_zero() {
        assert_eq!(f64_from_value(&json!("not a number")), 0.0);
        assert_eq!(f64_from_value(&json!(null)), 0.0);
        assert_eq!(f64_from_value(&json!({"nested": 1})), 0.0);
        assert_eq!(f64_from_value(&json!([1, 2])), 0.0);
    }

    #[test]
    fn test_f64_from_value_booleans() {
        assert_eq!(f64_from_value(&json!(true)), 1.0);
        assert_eq!(f64_from_value(&json!(false)), 0.0);
    }
}
