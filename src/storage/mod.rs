//! # Storage Module
//!
//! Key-value persistence backends for the ledger. The domain layer only
//! sees the `KvStore` trait; swapping the backend does not change any
//! ledger behavior.

pub mod json_file;
pub mod memory;
pub mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryKvStore;
pub use traits::KvStore;
