//! File-backed key-value store.
//!
//! One JSON document per key, stored as `<key>.json` under a base
//! directory. Keys are sanitized to a filesystem-safe character set before
//! use, so arbitrary key strings cannot escape the base directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use super::traits::KvStore;

/// Name of the subdirectory used under the platform data directory.
const APP_DIR_NAME: &str = "spendwise";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_directory: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }
        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a store under the platform data directory
    /// (e.g. `~/.local/share/spendwise` on Linux).
    pub fn new_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine platform data directory"))?;
        let base_path = data_dir.join(APP_DIR_NAME);
        info!("Using data directory: {}", base_path.display());
        Self::new(base_path)
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_directory
            .join(format!("{}.json", sanitize_key(key)))
    }
}

/// Map a key to a filesystem-safe file stem.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.file_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.file_path(key), value)?;
        Ok(())
    }
}
