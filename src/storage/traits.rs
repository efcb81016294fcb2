//! # Storage Traits
//!
//! Storage abstraction that lets different backends be used interchangeably
//! by the domain layer: an in-memory map for tests, a file per key for the
//! desktop build, or anything else with get/set-by-key semantics.

use anyhow::Result;

/// Synchronous string-keyed key-value store.
///
/// The ledger addresses it with keys derived from the user identifier and
/// stores one JSON document per key. Writes are last-write-wins; the store
/// makes no attempt at cross-process concurrency control, so callers that
/// need it must serialize writes externally.
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
