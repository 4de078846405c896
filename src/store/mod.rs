//! Key-value storage for battle records.
//!
//! The store is a flat byte map: battle records are serialized by a
//! [`Codec`](crate::Codec) before they reach it, and keys are the decimal
//! battle identifiers. Writes always overwrite; there is no versioning.
//!
//! ## Example
//!
//! ```ignore
//! use dino_extinction::{InMemoryStore, KeyValueStore};
//!
//! let store = InMemoryStore::new();
//! store.set("1234", vec![1, 2, 3])?;
//! assert_eq!(store.get("1234")?, Some(vec![1, 2, 3]));
//! ```

mod in_memory;

use std::fmt;

/// Error type for key-value store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store's internal lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
    /// The backing store rejected or failed the operation.
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::Backend(msg) => write!(f, "store backend error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Abstract byte storage keyed by string.
///
/// Implementations must be shareable across request handlers.
pub trait KeyValueStore: Send + Sync {
    /// Store `value` under `key`, replacing whatever was there.
    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Fetch the raw bytes stored under `key`. Returns None if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }
}

pub use in_memory::InMemoryStore;
