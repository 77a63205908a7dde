//! Theme preference persistence and application.
//!
//! Reads the visitor's preference from `localStorage` and applies the
//! `light` class to the `<html>` element; dark is the default and carries
//! no class. Persisting goes through the [`page::theme::ThemeStore`]
//! capability, so everything above this module is testable against an
//! in-memory store. Requires a browser environment; native builds load
//! the default and report writes as unavailable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use page::theme::{Appearance, StorageError, ThemeKeeper, ThemePreference, ThemeStore};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "gk_theme";

/// Preference store over the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl ThemeStore for LocalStore {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                Some(s) => s,
                None => return None,
            };
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)?;
            storage
                .set_item(STORAGE_KEY, value)
                .map_err(|err| StorageError::Rejected(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Err(StorageError::Unavailable)
        }
    }
}

/// Read the persisted preference, defaulting to dark.
pub fn load_preference() -> ThemePreference {
    ThemeKeeper::new(LocalStore).load()
}

/// Apply or remove the `light` class on the `<html>` element to match the
/// preference.
pub fn apply(pref: ThemePreference) {
    let looks = Appearance::of(pref);
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if looks.light_class {
                    let _ = class_list.add_1("light");
                } else {
                    let _ = class_list.remove_1("light");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = looks;
    }
}

/// Persist the preference. A refused write costs durability, not the
/// switch itself, so it is logged and otherwise ignored.
pub fn persist_preference(pref: ThemePreference) {
    if let Err(err) = ThemeKeeper::new(LocalStore).persist(pref) {
        leptos::logging::warn!("theme preference not saved: {err}");
    }
}
