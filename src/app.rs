//! Application bootstrap

use app_navigation::{NavigationCoordinator, NavigationError, NavigationHandle};
use std::sync::Arc;
use storage::{KvConfig, KvError, KvStore, UiStateStore};
use thiserror::Error;

use crate::config::{AppConfig, ConfigError};
use crate::logging::{self, LoggingError};

/// Bootstrap error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage could not be opened
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// Navigation could not be set up
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// The configured log filter is invalid
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}

/// A running application core
pub struct App {
    navigation: NavigationCoordinator,
    ui_state: UiStateStore,
}

impl App {
    /// Install logging, open storage and start navigation on the persisted tab
    ///
    /// A subscriber installed earlier by the host is kept.
    pub fn bootstrap(config: &AppConfig) -> Result<Self, AppError> {
        match logging::init(&config.log_filter) {
            Ok(()) | Err(LoggingError::AlreadyInitialized(_)) => {}
            Err(e) => return Err(e.into()),
        }

        let kv = KvStore::open(&KvConfig::new(config.storage_path.clone()))?;
        Self::with_store(config, kv)
    }

    /// Start on a temporary in-memory store
    pub fn in_memory(config: &AppConfig) -> Result<Self, AppError> {
        Self::with_store(config, KvStore::in_memory()?)
    }

    fn with_store(config: &AppConfig, kv: KvStore) -> Result<Self, AppError> {
        let ui_state = UiStateStore::new(kv);
        let navigation = NavigationCoordinator::new(&config.navigation, Arc::new(ui_state.clone()))?;

        tracing::info!(
            storage = %config.storage_path.display(),
            tab = ?navigation.selected_tab(),
            "podium core started"
        );

        Ok(Self { navigation, ui_state })
    }

    /// The navigation coordinator
    pub fn navigation(&self) -> &NavigationCoordinator {
        &self.navigation
    }

    /// The navigation coordinator, for applying transitions
    pub fn navigation_mut(&mut self) -> &mut NavigationCoordinator {
        &mut self.navigation
    }

    /// A handle for submitting navigation requests from other tasks
    pub fn navigation_handle(&self) -> NavigationHandle {
        self.navigation.handle()
    }

    /// Persisted UI state
    pub fn ui_state(&self) -> &UiStateStore {
        &self.ui_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_navigation::Tab;

    #[test]
    fn test_bootstrap_rejects_bad_log_filter() {
        // RUST_LOG overrides the configured filter
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default().storage_path(dir.path().join("kv.db"));
        config.log_filter = "app_navigation=notalevel".to_string();

        let err = App::bootstrap(&config).err().unwrap();
        assert!(matches!(err, AppError::Logging(LoggingError::Filter(_))));
    }

    #[test]
    fn test_bootstrap_tolerates_existing_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::default().storage_path(dir.path().join("kv.db"));

        let first = App::bootstrap(&config).unwrap();
        assert_eq!(first.navigation().selected_tab(), Tab::Home);
        drop(first);

        let second = App::bootstrap(&config).unwrap();
        assert_eq!(second.navigation().selected_tab(), Tab::Home);
    }
}
