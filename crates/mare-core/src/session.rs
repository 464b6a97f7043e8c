//! Session-scoped key/value storage.
//!
//! Storage is best-effort: readers treat any failure as "not set", and
//! writers report failures so callers can log and move on.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Errors raised by a [`SessionStore`] write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage rejected write to '{key}': {reason}")]
    Rejected { key: String, reason: String },
}

/// Key/value storage that lives for one browser session.
pub trait SessionStore {
    /// Returns the stored value, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory session store. Clones share the same map, so a clone can stand
/// in for "the same tab after a reload".
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// A store that is never available, e.g. storage blocked by privacy settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSession;

impl SessionStore for UnavailableSession {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
