use std::rc::Rc;

use super::*;

/// Store whose every call fails, like `localStorage` in a locked-down browser.
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn read(&self, _key: &str) -> Result<Option<String>, SiteError> {
        Err(SiteError::StorageUnavailable)
    }

    fn write(&self, key: &str, _value: &str) -> Result<(), SiteError> {
        Err(SiteError::Storage { op: "set", key: key.to_owned(), detail: "QuotaExceededError".to_owned() })
    }
}

#[test]
fn load_defaults_to_light_when_unset() {
    let pref = ThemePreference::load(Box::new(MemoryStore::new()), "theme");
    assert_eq!(pref.get(), Theme::Light);
}

#[test]
fn load_reads_stored_dark() {
    let pref = ThemePreference::load(Box::new(MemoryStore::with("theme", "dark")), "theme");
    assert_eq!(pref.get(), Theme::Dark);
}

#[test]
fn load_treats_unknown_value_as_unset() {
    let pref = ThemePreference::load(Box::new(MemoryStore::with("theme", "sepia")), "theme");
    assert_eq!(pref.get(), Theme::Light);
}

#[test]
fn set_writes_through() {
    let shared = Rc::new(MemoryStore::new());
    let pref = ThemePreference::load(Box::new(Rc::clone(&shared)), "theme");
    pref.set(Theme::Dark);
    assert_eq!(shared.read("theme").ok().flatten().as_deref(), Some("dark"));
}

#[test]
fn broken_store_keeps_session_value() {
    let pref = ThemePreference::load(Box::new(BrokenStore), "theme");
    assert_eq!(pref.get(), Theme::Light);
    pref.set(Theme::Dark);
    assert_eq!(pref.get(), Theme::Dark);
    pref.set(Theme::Light);
    assert_eq!(pref.get(), Theme::Light);
}
