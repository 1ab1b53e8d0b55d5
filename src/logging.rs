//! Logging setup
//!
//! Installs a `tracing` subscriber with an env filter. `RUST_LOG` takes
//! precedence over the configured default.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging setup error types
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Install the global subscriber
pub fn init(default_filter: &str) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_filter_is_reported() {
        // only reached when RUST_LOG is unset or itself invalid
        if std::env::var("RUST_LOG").is_err() {
            assert!(matches!(init("app_navigation=notalevel"), Err(LoggingError::Filter(_))));
        }
    }
}
