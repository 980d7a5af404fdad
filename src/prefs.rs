//! Durable theme preference.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a store that cannot be read or written only
//! produces a warning, and the in-memory value stays authoritative for the
//! rest of the session.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::SiteError;
use crate::theme::Theme;

/// Single-key string storage (browser `localStorage` in production).
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, SiteError>;
    fn write(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn read(&self, key: &str) -> Result<Option<String>, SiteError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SiteError> {
        (**self).write(key, value)
    }
}

/// Process-local store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The session's theme, loaded once and written through on every change.
pub struct ThemePreference {
    store: Box<dyn PreferenceStore>,
    key: String,
    current: Cell<Theme>,
}

impl ThemePreference {
    /// Read the stored value; anything missing, unknown or unreadable is `light`.
    pub fn load(store: Box<dyn PreferenceStore>, key: &str) -> Self {
        let current = match store.read(key) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                log::debug!("unrecognised stored theme {raw:?}; using default");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("theme preference read failed: {e}");
                Theme::default()
            }
        };
        Self { store, key: key.to_owned(), current: Cell::new(current) }
    }

    #[must_use]
    pub fn get(&self) -> Theme {
        self.current.get()
    }

    /// Update the session value, then persist it.
    pub fn set(&self, theme: Theme) {
        self.current.set(theme);
        if let Err(e) = self.store.write(&self.key, theme.as_str()) {
            log::warn!("theme preference write failed: {e}");
        }
    }
}
