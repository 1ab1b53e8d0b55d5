//! Persisted UI state
//!
//! Small pieces of interface state that should survive a restart, such as the
//! tab the user last had selected. Values live under the `ui` scope of the
//! key-value store.

use crate::kv::{KvStore, Result};

const UI_SCOPE: &str = "ui";
const SELECTED_TAB_KEY: &str = "selectedTab";

/// UI state backed by the key-value store
#[derive(Clone)]
pub struct UiStateStore {
    kv: KvStore,
}

impl UiStateStore {
    /// Create a UI state store over an existing key-value store
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Index of the last selected tab, if one was ever stored
    pub fn selected_tab_index(&self) -> Result<Option<usize>> {
        self.kv.get_scoped(&[UI_SCOPE, SELECTED_TAB_KEY])
    }

    /// Store the selected tab index and flush it to disk
    pub fn set_selected_tab_index(&self, index: usize) -> Result<()> {
        self.kv.set_scoped(&[UI_SCOPE, SELECTED_TAB_KEY], &index)?;
        self.kv.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_tab_defaults_to_none() {
        let store = UiStateStore::new(KvStore::in_memory().unwrap());
        assert_eq!(store.selected_tab_index().unwrap(), None);
    }

    #[test]
    fn test_selected_tab_overwrites() {
        let store = UiStateStore::new(KvStore::in_memory().unwrap());

        store.set_selected_tab_index(2).unwrap();
        store.set_selected_tab_index(4).unwrap();

        assert_eq!(store.selected_tab_index().unwrap(), Some(4));
    }

    #[test]
    fn test_selected_tab_survives_reopen() {
        use crate::kv::KvConfig;

        let dir = tempfile::tempdir().unwrap();
        let config = KvConfig::new(dir.path().join("ui.db"));

        {
            let store = UiStateStore::new(KvStore::open(&config).unwrap());
            store.set_selected_tab_index(3).unwrap();
        }

        let store = UiStateStore::new(KvStore::open(&config).unwrap());
        assert_eq!(store.selected_tab_index().unwrap(), Some(3));
    }
}
