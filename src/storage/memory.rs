//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use super::traits::KvStore;

/// Process-local store backed by a map. Clones share the same underlying
/// data, which makes it a drop-in fake for tests and a cheap default for
/// embedding without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
