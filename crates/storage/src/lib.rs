//! Storage layer for Podium
//!
//! This crate provides the sled-backed key-value store and the small
//! persisted UI state built on top of it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod ui_state;

pub use kv::{KvConfig, KvError, KvStore};
pub use ui_state::UiStateStore;
