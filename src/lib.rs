//! Podium application core
//!
//! Wires the navigation coordinator to durable storage and carries the
//! application-level configuration and logging setup. The interesting parts
//! live in the workspace crates:
//!
//! - [`app_navigation`] - navigation state, deep links, history
//! - [`storage`] - key-value persistence

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod logging;

pub use app::{App, AppError};
pub use config::{AppConfig, ConfigError};

pub use app_navigation;
pub use storage;
