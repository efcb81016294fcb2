//! # Spendwise
//!
//! Affordability advisor and savings ledger for personal purchase
//! decisions. Two independent cores share only their data shapes:
//!
//! - [`evaluate_purchase`] — a pure decision engine that classifies a
//!   prospective purchase against the user's monthly surplus.
//! - [`LedgerService`] — a per-user store of dated save/spend events with
//!   derived totals and a fixed-window daily cumulative net series.
//!
//! Both are synchronous and never return errors outward: invalid input is
//! coerced to safe defaults and broken persisted state reads as empty.

pub mod domain;
pub mod storage;

pub use domain::clock::{Clock, FixedClock, SystemClock};
pub use domain::commands::AddEntryCommand;
pub use domain::decision_service::evaluate_purchase;
pub use domain::ledger_service::{LedgerService, DEFAULT_SERIES_DAYS};
pub use domain::models::decision::DecisionResult;
pub use domain::models::ledger_entry::{DailySeriesPoint, EntryKind, LedgerEntry, LedgerSummary};
pub use domain::models::profile::UserProfile;
pub use storage::{JsonFileStore, KvStore, MemoryKvStore};

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Main backend struct that wires the default storage and clock.
///
/// Embedders that want a different backend or clock can construct
/// [`LedgerService`] directly; this is the batteries-included front door.
pub struct Backend {
    pub ledger_service: LedgerService<JsonFileStore, SystemClock>,
}

impl Backend {
    /// Create a backend storing ledgers under the platform data directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_store(JsonFileStore::new_default()?))
    }

    /// Create a backend storing ledgers under an explicit directory.
    pub fn new_in<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        Ok(Self::with_store(JsonFileStore::new(base_directory)?))
    }

    pub fn with_store(store: JsonFileStore) -> Self {
        Self {
            ledger_service: LedgerService::new(Arc::new(store), SystemClock),
        }
    }

    /// Classify a purchase against a profile. Pure pass-through; kept on the
    /// backend so embedders have a single entry point.
    pub fn evaluate_purchase(&self, price: f64, profile: &UserProfile) -> DecisionResult {
        evaluate_purchase(price, profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backend_smoke() {
        let temp_dir = TempDir::new().unwrap();
        let backend = Backend::new_in(temp_dir.path()).unwrap();

        let entry = backend
            .ledger_service
            .add_entry("u1", AddEntryCommand::save(100.0));
        assert_eq!(backend.ledger_service.read("u1"), vec![entry]);

        let verdict =
            backend.evaluate_purchase(150.0, &UserProfile::new("USD", 3000.0, 2000.0));
        assert!(verdict.outcome);
    }
}
