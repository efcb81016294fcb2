//! Ledger domain logic.
//!
//! Stores dated save/spend events per user and derives aggregate totals and
//! a fixed-window daily cumulative net series from them. Entries are kept in
//! reverse-chronological insertion order (newest first); that stored order
//! is canonical and is never re-sorted.
//!
//! Per the crate's error policy, every operation here has an infallible
//! signature: corrupt or unavailable persisted state degrades to "no data"
//! with a warning in the log, and invalid input is coerced rather than
//! rejected.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::{debug, warn};
use uuid::Uuid;

use crate::domain::clock::Clock;
use crate::domain::commands::AddEntryCommand;
use crate::domain::currency::DEFAULT_CURRENCY;
use crate::domain::models::ledger_entry::{
    coerce_amount, DailySeriesPoint, EntryKind, LedgerEntry, LedgerSummary,
};
use crate::storage::KvStore;

/// Namespace prefix for per-user storage keys.
const LEDGER_NAMESPACE: &str = "spendwise_ledger";

/// Default chart window, in days.
pub const DEFAULT_SERIES_DAYS: u32 = 30;

/// Service owning all reads and writes of a user's ledger.
pub struct LedgerService<S: KvStore, C: Clock> {
    store: Arc<S>,
    clock: C,
}

impl<S: KvStore, C: Clock + Clone> Clone for LedgerService<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: self.clock.clone(),
        }
    }
}

impl<S: KvStore, C: Clock> LedgerService<S, C> {
    pub fn new(store: Arc<S>, clock: C) -> Self {
        Self { store, clock }
    }

    fn ledger_key(user_id: &str) -> String {
        format!("{}_{}", LEDGER_NAMESPACE, user_id)
    }

    /// All stored entries for a user, newest first.
    ///
    /// An empty user id, a missing key, an unreadable backend, and
    /// unparseable stored JSON all yield an empty ledger.
    pub fn read(&self, user_id: &str) -> Vec<LedgerEntry> {
        if user_id.is_empty() {
            return Vec::new();
        }
        let raw = match self.store.get(&Self::ledger_key(user_id)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("Failed to read ledger for user {}: {}", user_id, err);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    "Discarding unparseable stored ledger for user {}: {}",
                    user_id, err
                );
                Vec::new()
            }
        }
    }

    /// Replace the stored entries wholesale.
    pub fn write(&self, user_id: &str, entries: &[LedgerEntry]) {
        if user_id.is_empty() {
            return;
        }
        let json = match serde_json::to_string(entries) {
            Ok(json) => json,
            Err(err) => {
                warn!("Failed to serialize ledger for user {}: {}", user_id, err);
                return;
            }
        };
        if let Err(err) = self.store.set(&Self::ledger_key(user_id), &json) {
            warn!("Failed to persist ledger for user {}: {}", user_id, err);
        }
    }

    /// Build a complete entry from the command, prepend it to the user's
    /// ledger, persist, and return it.
    ///
    /// Unset fields get their defaults here and nowhere else: a fresh UUID
    /// for the id, the clock's current time for both timestamps, kind
    /// `Spend`, amount 0, currency "USD", empty note and meta.
    pub fn add_entry(&self, user_id: &str, command: AddEntryCommand) -> LedgerEntry {
        let now = self.clock.now();
        let entry = LedgerEntry {
            id: command
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            created_at_ms: command.created_at_ms.unwrap_or_else(|| now.timestamp_millis()),
            date_iso: command
                .date_iso
                .filter(|date| !date.is_empty())
                .unwrap_or_else(|| now.to_rfc3339()),
            kind: command.kind.unwrap_or_default(),
            amount: coerce_amount(command.amount.unwrap_or(0.0)),
            currency_code: command
                .currency_code
                .filter(|code| !code.is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            goal_id: command.goal_id,
            note: command.note.unwrap_or_default(),
            meta: command.meta.unwrap_or_default(),
        };

        let mut entries = self.read(user_id);
        entries.insert(0, entry.clone());
        self.write(user_id, &entries);
        debug!(
            "Added {:?} entry of {} for user {}",
            entry.kind, entry.amount, user_id
        );
        entry
    }

    /// Remove the entry with the given id, if present, and return the
    /// resulting sequence. A missing id is a no-op, not an error.
    pub fn delete_entry(&self, user_id: &str, entry_id: &str) -> Vec<LedgerEntry> {
        let mut entries = self.read(user_id);
        entries.retain(|entry| entry.id != entry_id);
        self.write(user_id, &entries);
        entries
    }

    /// Aggregate totals over all entries, computed in a single pass.
    pub fn summarize(&self, user_id: &str) -> LedgerSummary {
        let entries = self.read(user_id);
        let mut saved = 0.0;
        let mut spent = 0.0;
        for entry in &entries {
            match entry.kind {
                EntryKind::Save => saved += entry.amount,
                EntryKind::Spend => spent += entry.amount,
                EntryKind::Other => {}
            }
        }
        LedgerSummary {
            count: entries.len(),
            saved,
            spent,
            net: saved - spent,
            entries,
        }
    }

    /// Cumulative net (saved minus spent) per day over the last `days`
    /// days, oldest first.
    ///
    /// The series always has exactly `days` points, one per calendar day up
    /// to and including today, so it can be charted directly without gap
    /// handling. Entries dated before the window are ignored entirely, not
    /// folded into the first bucket.
    pub fn build_daily_net_series(&self, user_id: &str, days: u32) -> Vec<DailySeriesPoint> {
        if days == 0 {
            return Vec::new();
        }
        let entries = self.read(user_id);
        let today = self.clock.today();
        let window_start = today - Duration::days(i64::from(days) - 1);

        // Net change per day inside the window.
        let mut delta_by_day: HashMap<NaiveDate, f64> = HashMap::new();
        for entry in &entries {
            let day = self.entry_day(entry);
            if day < window_start {
                continue;
            }
            let delta = match entry.kind {
                EntryKind::Save => entry.amount,
                EntryKind::Spend => -entry.amount,
                EntryKind::Other => 0.0,
            };
            *delta_by_day.entry(day).or_insert(0.0) += delta;
        }

        let mut series = Vec::with_capacity(days as usize);
        let mut cumulative = 0.0;
        for offset in 0..i64::from(days) {
            let day = window_start + Duration::days(offset);
            cumulative += delta_by_day.get(&day).copied().unwrap_or(0.0);
            series.push(DailySeriesPoint {
                day_key: day.format("%Y-%m-%d").to_string(),
                cumulative_net: cumulative,
            });
        }
        series
    }

    /// UTC calendar day an entry belongs to.
    ///
    /// Prefers the RFC 3339 `date_iso` field, falls back to the creation
    /// timestamp, and as a last resort buckets the entry under today.
    fn entry_day(&self, entry: &LedgerEntry) -> NaiveDate {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&entry.date_iso) {
            return parsed.with_timezone(&Utc).date_naive();
        }
        if entry.created_at_ms != 0 {
            if let Some(from_ts) = DateTime::<Utc>::from_timestamp_millis(entry.created_at_ms) {
                return from_ts.date_naive();
            }
        }
        self.clock.today()
    }
}
