//! Light/dark theme resolution and persistence.
//!
//! The mode lives in a single preference key (`"light"` or `"dark"`). At
//! startup a stored value wins; without one the OS color-scheme preference
//! decides, and dark is the fallback. The browser layer applies the returned
//! [`ThemeAppearance`] to the root element and toggle icon.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::error::SiteError;

/// Class placed on the document root while the light theme is active.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// Id of the theme toggle button; its first `<i>` child is the icon.
pub const TOGGLE_BUTTON_ID: &str = "mode-toggle";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Interpret a stored value. Anything other than `"light"` is dark.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == "light" { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Full class attribute for the toggle icon.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-moon",
            Self::Light => "fas fa-sun",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the startup mode: stored value, then OS light preference, then dark.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_light: bool) -> ThemeMode {
    match stored {
        Some(value) => ThemeMode::from_stored(value),
        None if prefers_light => ThemeMode::Light,
        None => ThemeMode::Dark,
    }
}

/// What the DOM should look like for a mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeAppearance {
    pub mode: ThemeMode,
    /// Whether [`LIGHT_MODE_CLASS`] should be present on the root.
    pub root_light_class: bool,
    pub icon_class: &'static str,
}

impl ThemeAppearance {
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        Self {
            mode,
            root_light_class: mode == ThemeMode::Light,
            icon_class: mode.icon_class(),
        }
    }
}

/// Synchronous key/value preference storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] when the backing store refuses the write.
    fn save(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// In-memory store, used when browser storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Owns the current mode and writes every change through to the store.
pub struct ThemeController<S> {
    store: S,
    key: String,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into(), mode: ThemeMode::Dark }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve the startup mode and apply it.
    pub fn initialize(&mut self, prefers_light: bool) -> ThemeAppearance {
        let stored = self.store.load(&self.key);
        let mode = resolve_initial(stored.as_deref(), prefers_light);
        log::debug!("theme: initial mode {mode} (stored={stored:?}, prefers_light={prefers_light})");
        self.set_mode(mode)
    }

    /// Switch to `mode` and persist it. A failed write still switches.
    pub fn set_mode(&mut self, mode: ThemeMode) -> ThemeAppearance {
        self.mode = mode;
        if let Err(e) = self.store.save(&self.key, mode.as_str()) {
            log::warn!("theme: could not persist mode: {e}");
        }
        ThemeAppearance::for_mode(mode)
    }

    /// Flip based on the root's current class, not the cached mode.
    pub fn toggle(&mut self, root_is_light: bool) -> ThemeAppearance {
        let next = if root_is_light { ThemeMode::Dark } else { ThemeMode::Light };
        self.set_mode(next)
    }
}
