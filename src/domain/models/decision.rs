//! Domain model for a purchase decision.

use serde::Serialize;

/// Verdict of the decision engine: a boolean outcome plus a human-readable
/// explanation. Computed fresh per call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionResult {
    pub outcome: bool,
    pub message: String,
}

impl DecisionResult {
    pub fn approved(message: impl Into<String>) -> Self {
        Self {
            outcome: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            outcome: false,
            message: message.into(),
        }
    }
}
