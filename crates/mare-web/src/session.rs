//! Browser `sessionStorage` adapter.

use mare_core::{SessionStore, StorageError};

/// Session store backed by `window.sessionStorage`.
///
/// Storage may be missing or blocked (private mode, sandboxed iframes); every
/// read then reports "not set" and every write fails with
/// [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok()?
    }
}

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|err| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}
