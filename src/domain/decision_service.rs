//! Purchase affordability decision logic.
//!
//! A pure classification of a prospective purchase against the user's
//! monthly surplus (income minus expenses). No I/O, no side effects; the
//! same inputs always produce the same verdict.

use crate::domain::currency::{self, DEFAULT_CURRENCY};
use crate::domain::models::decision::DecisionResult;
use crate::domain::models::profile::UserProfile;

/// Purchases at or below this share of the monthly surplus are safe.
pub const SAFE_RATIO: f64 = 0.20;
/// Purchases at or below this share are allowed, with a caution.
pub const CAUTION_RATIO: f64 = 0.50;

const INVALID_AMOUNT_MESSAGE: &str = "Enter a valid purchase amount.";

/// Classify a purchase of `price` against the profile's monthly surplus.
///
/// Checks run in a fixed order: amount validity, then surplus positivity,
/// then the ratio tiers. Both ratio boundaries are inclusive to the safer
/// tier, which is deliberate and load-bearing for boundary inputs.
pub fn evaluate_purchase(price: f64, profile: &UserProfile) -> DecisionResult {
    let currency_code = if profile.currency_code.is_empty() {
        DEFAULT_CURRENCY
    } else {
        profile.currency_code.as_str()
    };
    let income = coerce_finite(profile.income_monthly);
    let expenses = coerce_finite(profile.expenses_monthly);
    let surplus = income - expenses;

    let fmt = |amount: f64| currency::format_amount(amount, currency_code);

    if !price.is_finite() || price <= 0.0 {
        return DecisionResult::rejected(INVALID_AMOUNT_MESSAGE);
    }

    if surplus <= 0.0 {
        return DecisionResult::rejected(format!(
            "You currently have no monthly surplus (surplus: {}). This purchase is NOT recommended.",
            fmt(surplus)
        ));
    }

    let ratio = price / surplus;
    let percent = (ratio * 100.0).round() as i64;

    if ratio <= SAFE_RATIO {
        return DecisionResult::approved(format!(
            "✅ Safe: {} is about {}% of your monthly surplus ({}).",
            fmt(price),
            percent,
            fmt(surplus)
        ));
    }

    if ratio <= CAUTION_RATIO {
        return DecisionResult::approved(format!(
            "⚠️ Caution: {} is about {}% of your monthly surplus ({}). You can buy it, but it may slow goal progress.",
            fmt(price),
            percent,
            fmt(surplus)
        ));
    }

    DecisionResult::rejected(format!(
        "❌ Not recommended: {} is about {}% of your monthly surplus ({}). This is likely to impact your goals.",
        fmt(price),
        percent,
        fmt(surplus)
    ))
}

fn coerce_finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(income: f64, expenses: f64) -> UserProfile {
        UserProfile::new("USD", income, expenses)
    }

    #[test]
    fn test_invalid_price_is_rejected_regardless_of_profile() {
        let p = profile(5000.0, 1000.0);
        for price in [0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = evaluate_purchase(price, &p);
            assert!(!result.outcome);
            assert_eq!(result.message, INVALID_AMOUNT_MESSAGE);
        }
    }

    #[test]
    fn test_invalid_price_check_precedes_surplus_check() {
        // Zero surplus would also reject, but with a different message.
        let result = evaluate_purchase(-1.0, &profile(0.0, 0.0));
        assert_eq!(result.message, INVALID_AMOUNT_MESSAGE);
    }

    #[test]
    fn test_zero_surplus_is_rejected() {
        let result = evaluate_purchase(50.0, &profile(1000.0, 1000.0));
        assert!(!result.outcome);
        assert!(result.message.contains("no monthly surplus"));
        assert!(result.message.contains("$0"));
    }

    #[test]
    fn test_negative_surplus_is_rejected() {
        let result = evaluate_purchase(50.0, &profile(1000.0, 1500.0));
        assert!(!result.outcome);
        assert!(result.message.contains("no monthly surplus"));
        assert!(result.message.contains("-$500"));
    }

    #[test]
    fn test_safe_tier_message() {
        let result = evaluate_purchase(200.0, &profile(3000.0, 2000.0));
        assert!(result.outcome);
        assert_eq!(
            result.message,
            "✅ Safe: $200 is about 20% of your monthly surplus ($1,000)."
        );
    }

    #[test]
    fn test_caution_tier_message() {
        let result = evaluate_purchase(400.0, &profile(3000.0, 2000.0));
        assert!(result.outcome);
        assert!(result.message.starts_with("⚠️ Caution: $400 is about 40%"));
        assert!(result.message.contains("may slow goal progress"));
    }

    #[test]
    fn test_blocked_tier_message() {
        let result = evaluate_purchase(800.0, &profile(3000.0, 2000.0));
        assert!(!result.outcome);
        assert!(result.message.starts_with("❌ Not recommended: $800 is about 80%"));
        assert!(result.message.contains("likely to impact your goals"));
    }

    #[test]
    fn test_ratio_boundaries_resolve_to_safer_tier() {
        let p = profile(2000.0, 1000.0); // surplus 1000

        // Exactly 20% is still safe.
        let result = evaluate_purchase(200.0, &p);
        assert!(result.outcome);
        assert!(result.message.starts_with("✅ Safe"));

        // Just above 20% drops to caution.
        let result = evaluate_purchase(200.00001, &p);
        assert!(result.outcome);
        assert!(result.message.starts_with("⚠️ Caution"));

        // Exactly 50% is still caution.
        let result = evaluate_purchase(500.0, &p);
        assert!(result.outcome);
        assert!(result.message.starts_with("⚠️ Caution"));

        // Just above 50% is blocked.
        let result = evaluate_purchase(500.001, &p);
        assert!(!result.outcome);
        assert!(result.message.starts_with("❌ Not recommended"));
    }

    #[test]
    fn test_non_finite_profile_fields_coerce_to_zero() {
        // NaN income counts as 0, so the surplus is -500.
        let result = evaluate_purchase(50.0, &profile(f64::NAN, 500.0));
        assert!(!result.outcome);
        assert!(result.message.contains("no monthly surplus"));
    }

    #[test]
    fn test_empty_currency_code_defaults_to_usd() {
        let result = evaluate_purchase(100.0, &UserProfile::new("", 3000.0, 2000.0));
        assert!(result.message.contains("$100"));
    }

    #[test]
    fn test_unknown_currency_code_uses_plain_fallback() {
        let result = evaluate_purchase(100.0, &UserProfile::new("ZZZ", 3000.0, 2000.0));
        assert!(result.message.contains("100 ZZZ"));
        assert!(result.message.contains("1,000 ZZZ"));
    }

    #[test]
    fn test_evaluate_is_pure() {
        let p = profile(4200.0, 3100.0);
        assert_eq!(evaluate_purchase(333.0, &p), evaluate_purchase(333.0, &p));
    }
}
