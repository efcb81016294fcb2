//! Domain model for a ledger entry.
//!
//! Entries are persisted as a JSON array per user, newest first. Field names
//! on the wire (`ts`, `dateISO`, `type`, `currencyCode`, `goalId`, `meta`)
//! are stable and must not change, since existing stored ledgers use them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::currency::DEFAULT_CURRENCY;

/// Kind of financial event an entry records.
///
/// `Other` absorbs unknown kind strings found in stored data so a single odd
/// row cannot poison a read. Other entries count toward `count` but
/// contribute nothing to totals or the daily series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Save,
    #[default]
    Spend,
    Other,
}

impl<'de> Deserialize<'de> for EntryKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some("save") => EntryKind::Save,
            Some("spend") => EntryKind::Spend,
            _ => EntryKind::Other,
        })
    }
}

/// One financial event in a user's ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    #[serde(default)]
    pub id: String,
    /// Creation time, epoch milliseconds.
    #[serde(rename = "ts", default)]
    pub created_at_ms: i64,
    /// RFC 3339 date-time used for day bucketing.
    #[serde(rename = "dateISO", default)]
    pub date_iso: String,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    /// Always finite and >= 0 after construction or deserialization.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,
    #[serde(rename = "currencyCode", default = "default_currency_code")]
    pub currency_code: String,
    /// Reference to an external goal; no referential integrity is enforced.
    #[serde(rename = "goalId", default)]
    pub goal_id: Option<String>,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub meta: serde_json::Map<String, Value>,
}

/// Clamp an amount to the finite non-negative range; anything else is 0.
pub fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn default_currency_code() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_amount(super::f64_from_value(&value)))
}

/// Aggregate totals over a ledger, computed in a single pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub count: usize,
    pub saved: f64,
    pub spent: f64,
    pub net: f64,
    pub entries: Vec<LedgerEntry>,
}

/// One point of the cumulative daily net series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeriesPoint {
    /// Calendar day in `YYYY-MM-DD` form (UTC).
    #[serde(rename = "dayKey")]
    pub day_key: String,
    #[serde(rename = "cumulativeNet")]
    pub cumulative_net: f64,
}
