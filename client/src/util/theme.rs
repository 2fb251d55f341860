//! Light/dark theme preference: load, apply, toggle, persist.
//!
//! The preference lives in `localStorage` under [`STORAGE_KEY`] as the plain
//! string `"light"` or `"dark"`. Light mode is expressed by the `light-theme`
//! class on `<body>`; dark is the unstyled default.
//!
//! TRADE-OFFS
//! ==========
//! Persistence goes through the injected [`PreferenceStore`] so the toggle
//! logic is testable off-browser. Storage failures are swallowed: an
//! unavailable store reads as "no preference" and drops writes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const STORAGE_KEY: &str = "theme";
pub const LIGHT_CLASS: &str = "light-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored value. Only `"light"` selects light mode.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The switch reads "checked" while dark mode is on.
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_checked(self) -> bool {
        self == Self::Dark
    }
}

/// Key/value persistence for UI preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// [`PreferenceStore`] backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Read the stored theme, defaulting to dark.
pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    Theme::from_stored(store.load(STORAGE_KEY).as_deref())
}

pub fn store_theme(store: &impl PreferenceStore, theme: Theme) {
    store.save(STORAGE_KEY, theme.as_str());
}

/// Handle a switch `change`: derive the theme, persist it, apply it.
pub fn on_switch_changed(store: &impl PreferenceStore, checked: bool) -> Theme {
    let theme = Theme::from_checked(checked);
    store_theme(store, theme);
    apply(theme);
    theme
}

/// Add or remove the light-mode class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let class_list = body.class_list();
        match theme {
            Theme::Light => {
                let _ = class_list.add_1(LIGHT_CLASS);
            }
            Theme::Dark => {
                let _ = class_list.remove_1(LIGHT_CLASS);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
