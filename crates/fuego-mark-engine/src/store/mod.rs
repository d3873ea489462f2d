//! # Document Store
//!
//! The persistence collaborator: a key-value store of opaque strings. The
//! session calls [`DocumentStore::get`] once at startup and
//! [`DocumentStore::set`] after every pipeline pass.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid document key: {0:?}")]
    InvalidKey(String),
    #[error("Store directory not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait DocumentStore {
    /// Returns the stored value, or `None` if the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Checks that a key is usable as a single file name.
///
/// Keys are non-empty, limited to ASCII letters, digits, `.`, `_` and `-`,
/// and must not start with `.`.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
