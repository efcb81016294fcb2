//! Commands consumed by the domain services.

use serde_json::{Map, Value};

use crate::domain::models::ledger_entry::EntryKind;

/// Draft of a ledger entry passed to `LedgerService::add_entry`.
///
/// Every field is optional; the service fills the documented defaults for
/// anything left unset. This is the sole creation point for entries, so id
/// and timestamp assignment never happens anywhere else.
#[derive(Debug, Clone, Default)]
pub struct AddEntryCommand {
    pub id: Option<String>,
    pub created_at_ms: Option<i64>,
    pub date_iso: Option<String>,
    pub kind: Option<EntryKind>,
    pub amount: Option<f64>,
    pub currency_code: Option<String>,
    pub goal_id: Option<String>,
    pub note: Option<String>,
    pub meta: Option<Map<String, Value>>,
}

impl AddEntryCommand {
    /// Draft for a save event of the given amount.
    pub fn save(amount: f64) -> Self {
        Self {
            kind: Some(EntryKind::Save),
            amount: Some(amount),
            ..Self::default()
        }
    }

    /// Draft for a spend event of the given amount.
    pub fn spend(amount: f64) -> Self {
        Self {
            kind: Some(EntryKind::Spend),
            amount: Some(amount),
            ..Self::default()
        }
    }

    pub fn with_date_iso(mut self, date_iso: impl Into<String>) -> Self {
        self.date_iso = Some(date_iso.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_goal_id(mut self, goal_id: impl Into<String>) -> Self {
        self.goal_id = Some(goal_id.into());
        self
    }
}
