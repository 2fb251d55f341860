use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

// =============================================================
// Theme parsing
// =============================================================

#[test]
fn from_stored_light_is_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn from_stored_missing_defaults_to_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn from_stored_unknown_value_is_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
}

#[test]
fn switch_checked_means_dark() {
    assert_eq!(Theme::from_checked(true), Theme::Dark);
    assert_eq!(Theme::from_checked(false), Theme::Light);
    assert!(Theme::Dark.is_checked());
    assert!(!Theme::Light.is_checked());
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn stored_light_loads_as_unchecked_light_theme() {
    let store = MemoryStore::with(STORAGE_KEY, "light");
    let theme = load_theme(&store);
    assert_eq!(theme, Theme::Light);
    assert!(!theme.is_checked());
}

#[test]
fn empty_store_loads_dark() {
    assert_eq!(load_theme(&MemoryStore::default()), Theme::Dark);
}

#[test]
fn switch_change_overwrites_stored_value() {
    let store = MemoryStore::with(STORAGE_KEY, "dark");
    assert_eq!(on_switch_changed(&store, false), Theme::Light);
    assert_eq!(store.load(STORAGE_KEY).as_deref(), Some("light"));
    assert_eq!(on_switch_changed(&store, true), Theme::Dark);
    assert_eq!(store.load(STORAGE_KEY).as_deref(), Some("dark"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_outside_browser() {
    let store = BrowserStorage;
    store.save(STORAGE_KEY, "light");
    assert_eq!(load_theme(&store), Theme::Dark);
}
