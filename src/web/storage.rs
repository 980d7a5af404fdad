//! `localStorage`-backed preference store.

use web_sys::{Storage, Window};

use super::describe;
use crate::error::SiteError;
use crate::prefs::PreferenceStore;

pub struct LocalStorage {
    window: Window,
}

impl LocalStorage {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Looked up on every call: access can be revoked mid-session.
    fn storage(&self) -> Result<Storage, SiteError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) | Err(_) => Err(SiteError::StorageUnavailable),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, SiteError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SiteError::Storage { op: "get", key: key.to_owned(), detail: describe(&e) })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SiteError::Storage { op: "set", key: key.to_owned(), detail: describe(&e) })
    }
}
