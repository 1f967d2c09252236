//! Browser-backed [`PreferenceStore`].

use web_sys::{Storage, Window};

use super::dom::describe;
use crate::error::SiteError;
use crate::theme::{MemoryStore, PreferenceStore};

/// localStorage when the browser grants it, memory otherwise (private
/// browsing, disabled storage). The memory variant keeps toggling working
/// for the current page.
pub(crate) enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub(crate) fn detect(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            Ok(None) => {
                log::info!("storage: localStorage unavailable, theme will not persist");
                Self::Memory(MemoryStore::new())
            }
            Err(e) => {
                log::warn!("storage: localStorage denied: {}", describe(&e));
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("storage: cannot read `{key}`: {}", describe(&e));
                    None
                }
            },
            Self::Memory(memory) => memory.load(key),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SiteError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| SiteError::Storage(describe(&e))),
            Self::Memory(memory) => memory.save(key, value),
        }
    }
}
