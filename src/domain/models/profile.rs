//! Domain model for a user's financial profile.
//!
//! The profile comes from the presentation layer and is untrusted: numeric
//! fields deserialize leniently and default to 0 when malformed.

use serde::{Deserialize, Serialize};

/// Monthly income/expense figures used by the decision engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// ISO 4217 code for display formatting; empty means "USD".
    #[serde(rename = "currencyCode", default)]
    pub currency_code: String,
    #[serde(rename = "incomeMonthly", default, deserialize_with = "super::lenient_f64")]
    pub income_monthly: f64,
    #[serde(rename = "expensesMonthly", default, deserialize_with = "super::lenient_f64")]
    pub expenses_monthly: f64,
}

impl UserProfile {
    pub fn new(currency_code: impl Into<String>, income_monthly: f64, expenses_monthly: f64) -> Self {
        Self {
            currency_code: currency_code.into(),
            income_monthly,
            expenses_monthly,
        }
    }
}
