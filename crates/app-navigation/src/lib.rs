//! Navigation coordination for Podium
//!
//! This crate owns which screen is visible: the selected tab, the push stack
//! of that tab, the presented modal and a bounded navigation history. It also
//! routes deep links into navigation and builds share links.
//!
//! # Modules
//!
//! - [`destination`] - Navigable destinations and their classification
//! - [`tab`] - Main tabs
//! - [`state`] - The navigation state aggregate
//! - [`history`] - Bounded history ledger
//! - [`router`] - Deep-link router
//! - [`links`] - Deep-link and share-URL generation
//! - [`coordinator`] - State owner, inbound queue and outbound signals
//! - [`persistence`] - Selected-tab persistence capability
//! - [`config`] - Navigation configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod coordinator;
pub mod destination;
pub mod error;
pub mod events;
pub mod history;
pub mod links;
pub mod persistence;
pub mod router;
pub mod state;
pub mod tab;

pub use config::NavigationConfig;
pub use coordinator::{NavigationCoordinator, NavigationHandle};
pub use destination::{ContentKind, Destination, DestinationClass, EntityRef};
pub use error::{NavigationError, Result};
pub use events::{InboundEvent, NavigationSignal};
pub use history::{HistoryEntry, HistoryLedger, MAX_HISTORY_ENTRIES, RECENT_DESTINATIONS};
pub use links::LinkBuilder;
pub use persistence::TabPersistence;
pub use router::{ContentRequest, DeepLinkError, DeepLinkRouter, RouteAction};
pub use state::{NavigationState, StackEntry};
pub use tab::Tab;
