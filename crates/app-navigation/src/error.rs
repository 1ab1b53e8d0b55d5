//! Navigation error types

use thiserror::Error;

/// Navigation error types
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The coordinator behind a handle has been dropped
    #[error("Navigation coordinator is no longer running")]
    CoordinatorClosed,

    /// Invalid configuration value
    #[error("Invalid navigation config: {0}")]
    InvalidConfig(String),
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;
