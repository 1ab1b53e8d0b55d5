//! Selected-tab persistence
//!
//! The coordinator does not know where the selected tab is stored; it is
//! handed a [`TabPersistence`] at construction. Writes are best effort:
//! failures are logged and never reach the caller.

use storage::kv::Result;
use storage::UiStateStore;

use crate::tab::Tab;

/// Durable storage for the last selected tab
#[cfg_attr(test, mockall::automock)]
pub trait TabPersistence: Send + Sync {
    /// Stored tab index, if any
    fn load_tab_index(&self) -> Result<Option<usize>>;

    /// Store a tab index
    fn save_tab_index(&self, index: usize) -> Result<()>;
}

impl TabPersistence for UiStateStore {
    fn load_tab_index(&self) -> Result<Option<usize>> {
        self.selected_tab_index()
    }

    fn save_tab_index(&self, index: usize) -> Result<()> {
        self.set_selected_tab_index(index)
    }
}

/// Load the persisted tab, falling back to [`Tab::Home`]
pub fn load_tab(persistence: &dyn TabPersistence) -> Tab {
    match persistence.load_tab_index() {
        Ok(Some(index)) => Tab::from_index(index).unwrap_or_else(|| {
            tracing::warn!(index, "persisted tab index out of range, using home");
            Tab::Home
        }),
        Ok(None) => Tab::Home,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load persisted tab, using home");
            Tab::Home
        }
    }
}

/// Persist a tab, logging failures
pub fn save_tab(persistence: &dyn TabPersistence, tab: Tab) {
    if let Err(e) = persistence.save_tab_index(tab.index()) {
        tracing::warn!(tab = ?tab, error = %e, "failed to persist selected tab");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::{KvError, KvStore};

    #[test]
    fn test_ui_state_store_round_trip() {
        let store = UiStateStore::new(KvStore::in_memory().unwrap());
        assert_eq!(load_tab(&store), Tab::Home);

        save_tab(&store, Tab::Blog);
        assert_eq!(store.selected_tab_index().unwrap(), Some(3));
        assert_eq!(load_tab(&store), Tab::Blog);
    }

    #[test]
    fn test_out_of_range_index_falls_back_home() {
        let mut mock = MockTabPersistence::new();
        mock.expect_load_tab_index().returning(|| Ok(Some(99)));
        assert_eq!(load_tab(&mock), Tab::Home);
    }

    #[test]
    fn test_load_error_falls_back_home() {
        let mut mock = MockTabPersistence::new();
        mock.expect_load_tab_index()
            .returning(|| Err(KvError::InvalidKey("corrupt".to_string())));
        assert_eq!(load_tab(&mock), Tab::Home);
    }

    #[test]
    fn test_save_error_is_swallowed() {
        let mut mock = MockTabPersistence::new();
        mock.expect_save_tab_index()
            .withf(|index| *index == Tab::Downloads.index())
            .times(1)
            .returning(|_| Err(KvError::InvalidKey("read-only".to_string())));
        save_tab(&mock, Tab::Downloads);
    }
}
