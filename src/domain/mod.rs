//! Domain layer: models, services, and their collaborators.
//!
//! The two cores never call each other. `decision_service` is a pure
//! function over a profile; `ledger_service` owns the persisted event list.
//! Composition happens in whatever presentation layer embeds this crate.

pub mod clock;
pub mod commands;
pub mod currency;
pub mod decision_service;
pub mod ledger_service;
pub mod models;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::AddEntryCommand;
pub use decision_service::evaluate_purchase;
pub use ledger_service::{LedgerService, DEFAULT_SERIES_DAYS};
