#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two-valued display mode. Dark is the default for first-time visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Parse a persisted value. Only the exact string `"light"` selects
    /// [`ThemePreference::Light`]; any other value, and absence, fall back
    /// to dark.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// String form written to the store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The opposite preference.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Visual outputs of a preference.
///
/// The document-root styling class, the toggle glyph, and the toggle's
/// `aria-pressed` value are all projections of the current
/// [`ThemePreference`] and of nothing else; applying the same preference
/// twice lands in the same observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    /// Whether the document root carries the `light` styling class.
    pub light_class: bool,
    /// Glyph shown on the toggle control.
    pub glyph: &'static str,
    /// `aria-pressed` value for the toggle control.
    pub aria_pressed: &'static str,
}

impl Appearance {
    #[must_use]
    pub fn of(pref: ThemePreference) -> Self {
        match pref {
            ThemePreference::Light => Self {
                light_class: true,
                glyph: "☀️",
                aria_pressed: "true",
            },
            ThemePreference::Dark => Self {
                light_class: false,
                glyph: "🌙",
                aria_pressed: "false",
            },
        }
    }
}

/// Raised when persisting a preference fails. Loading never fails: absent
/// or malformed values read as the dark default.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No store is reachable (storage disabled, or a non-browser build).
    #[error("preference store is unavailable")]
    Unavailable,
    /// The store refused the write (quota exceeded, privacy mode).
    #[error("preference store rejected the write: {0}")]
    Rejected(String),
}

/// Capability over the persisted preference copy.
///
/// The browser build implements this over local storage; tests and native
/// builds use [`MemoryStore`].
pub trait ThemeStore {
    /// Read the raw stored value, if any.
    fn read(&self) -> Option<String>;

    /// Write the string form of a preference.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store is unreachable or
    /// refuses the write.
    fn write(&mut self, value: &str) -> Result<(), StorageError>;
}

/// In-process store for tests and native builds.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with a raw value, as if written by an earlier visit.
    #[must_use]
    pub fn holding(value: &str) -> Self {
        Self { value: Some(value.to_owned()) }
    }
}

impl ThemeStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.value.clone()
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        self.value = Some(value.to_owned());
        Ok(())
    }
}

/// The preference manager: loads and persists against an injected store.
pub struct ThemeKeeper<S: ThemeStore> {
    store: S,
}

impl<S: ThemeStore> ThemeKeeper<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted preference, defaulting to dark.
    #[must_use]
    pub fn load(&self) -> ThemePreference {
        ThemePreference::from_stored(self.store.read().as_deref())
    }

    /// Persist the preference's string form.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`StorageError`]; the in-memory preference is
    /// unaffected either way.
    pub fn persist(&mut self, pref: ThemePreference) -> Result<(), StorageError> {
        self.store.write(pref.as_str())
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
