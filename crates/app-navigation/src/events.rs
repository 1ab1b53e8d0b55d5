//! Inbound requests and outbound signals

use crate::destination::{Destination, EntityRef};
use crate::router::ContentRequest;
use crate::tab::Tab;

/// Navigation requests delivered to the coordinator through its inbound queue
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    /// Navigate to a destination
    Navigate(Destination),
    /// Present a modal destination
    Present(Destination),
    /// Dismiss the presented modal
    Dismiss,
    /// Go back one step
    GoBack,
    /// Clear the push stack
    PopToRoot,
    /// Select a tab
    SelectTab(Tab),
    /// Open an external URL
    OpenUrl(String),
    /// A content lookup requested by a deep link finished
    ContentResolved {
        /// The request being answered
        request: ContentRequest,
        /// The entity, or `None` if the lookup failed
        entity: Option<EntityRef>,
    },
}

/// Signals broadcast by the coordinator to collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationSignal {
    /// Look up content by identifier so it can be shown
    SearchContent(ContentRequest),
    /// Resolve an inbound share payload
    ShareReceived {
        /// Share identifier
        share_id: String,
    },
}
