//! Navigation coordinator
//!
//! The coordinator is the single owner of [`NavigationState`]. Everything else
//! either reads state through a [`watch`] subscription or asks for navigation
//! through a [`NavigationHandle`], whose requests are queued and applied on the
//! coordinator's own context by [`NavigationCoordinator::drain`] or
//! [`NavigationCoordinator::process_next`]. No locks are involved.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use app_navigation::{Destination, NavigationConfig, NavigationCoordinator, Tab};
//! use storage::{KvStore, UiStateStore};
//!
//! let store = UiStateStore::new(KvStore::in_memory().unwrap());
//! let mut nav = NavigationCoordinator::new(&NavigationConfig::default(), Arc::new(store)).unwrap();
//!
//! nav.open_url("podium://conference/rustconf");
//! assert_eq!(nav.selected_tab(), Tab::Conferences);
//! assert_eq!(nav.stack().len(), 1);
//!
//! nav.present(Destination::Settings);
//! assert!(nav.go_back()); // pops the conference first
//! assert_eq!(nav.presented_modal(), Some(&Destination::Settings));
//! ```

use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, watch};

use crate::config::NavigationConfig;
use crate::destination::{Destination, EntityRef};
use crate::error::{NavigationError, Result};
use crate::events::{InboundEvent, NavigationSignal};
use crate::history::HistoryLedger;
use crate::links::LinkBuilder;
use crate::persistence::{load_tab, save_tab, TabPersistence};
use crate::router::{ContentRequest, DeepLinkRouter, RouteAction};
use crate::state::{NavigationState, StackEntry};
use crate::tab::Tab;

// =============================================================================
// Handle
// =============================================================================

/// Cloneable capability to request navigation
///
/// Requests are queued; they take effect when the coordinator drains its
/// inbound queue.
#[derive(Debug, Clone)]
pub struct NavigationHandle {
    tx: mpsc::UnboundedSender<InboundEvent>,
}

impl NavigationHandle {
    /// Queue an inbound event
    pub fn send(&self, event: InboundEvent) -> Result<()> {
        self.tx.send(event).map_err(|_| NavigationError::CoordinatorClosed)
    }

    /// Request navigation to a destination
    pub fn navigate(&self, destination: Destination) -> Result<()> {
        self.send(InboundEvent::Navigate(destination))
    }

    /// Request a modal presentation
    pub fn present(&self, destination: Destination) -> Result<()> {
        self.send(InboundEvent::Present(destination))
    }

    /// Request the modal be dismissed
    pub fn dismiss(&self) -> Result<()> {
        self.send(InboundEvent::Dismiss)
    }

    /// Request a back navigation
    pub fn go_back(&self) -> Result<()> {
        self.send(InboundEvent::GoBack)
    }

    /// Request the push stack be cleared
    pub fn pop_to_root(&self) -> Result<()> {
        self.send(InboundEvent::PopToRoot)
    }

    /// Request a tab switch
    pub fn select_tab(&self, tab: Tab) -> Result<()> {
        self.send(InboundEvent::SelectTab(tab))
    }

    /// Deliver an external URL
    pub fn open_url(&self, url: impl Into<String>) -> Result<()> {
        self.send(InboundEvent::OpenUrl(url.into()))
    }

    /// Report the outcome of a content lookup
    pub fn content_resolved(&self, request: ContentRequest, entity: Option<EntityRef>) -> Result<()> {
        self.send(InboundEvent::ContentResolved { request, entity })
    }
}

// =============================================================================
// Coordinator
// =============================================================================

/// Owner of the navigation state and its transitions
pub struct NavigationCoordinator {
    state: NavigationState,
    router: DeepLinkRouter,
    links: LinkBuilder,
    persistence: Arc<dyn TabPersistence>,
    /// Last content lookup requested by a deep link and not yet answered
    pending_content: Option<ContentRequest>,
    inbound_tx: mpsc::UnboundedSender<InboundEvent>,
    inbound_rx: mpsc::UnboundedReceiver<InboundEvent>,
    signals: broadcast::Sender<NavigationSignal>,
    snapshots: watch::Sender<NavigationState>,
}

impl NavigationCoordinator {
    /// Create a coordinator on the persisted tab (or home)
    pub fn new(config: &NavigationConfig, persistence: Arc<dyn TabPersistence>) -> Result<Self> {
        let tab = load_tab(persistence.as_ref());
        Self::with_state(config, persistence, NavigationState::with_tab(tab))
    }

    /// Create a coordinator from a saved state snapshot
    ///
    /// The snapshot is sanitized first and its tab is written back to the
    /// persisted tab.
    pub fn restore(
        config: &NavigationConfig,
        persistence: Arc<dyn TabPersistence>,
        snapshot: NavigationState,
    ) -> Result<Self> {
        let coordinator = Self::with_state(config, persistence, snapshot.sanitized())?;
        save_tab(coordinator.persistence.as_ref(), coordinator.state.selected_tab());
        Ok(coordinator)
    }

    fn with_state(
        config: &NavigationConfig,
        persistence: Arc<dyn TabPersistence>,
        state: NavigationState,
    ) -> Result<Self> {
        config.validate()?;

        let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
        let (signals, _) = broadcast::channel(config.signal_capacity);
        let (snapshots, _) = watch::channel(state.clone());

        tracing::info!(
            tab = ?state.selected_tab(),
            depth = state.stack_depth(),
            scheme = %config.scheme,
            "navigation coordinator ready"
        );

        Ok(Self {
            state,
            router: DeepLinkRouter::new(config),
            links: LinkBuilder::new(config),
            persistence,
            pending_content: None,
            inbound_tx,
            inbound_rx,
            signals,
            snapshots,
        })
    }

    // -------------------------------------------------------------------------
    // Wiring
    // -------------------------------------------------------------------------

    /// A handle for submitting navigation requests
    pub fn handle(&self) -> NavigationHandle {
        NavigationHandle { tx: self.inbound_tx.clone() }
    }

    /// Subscribe to state snapshots, published after every transition
    pub fn subscribe_state(&self) -> watch::Receiver<NavigationState> {
        self.snapshots.subscribe()
    }

    /// Subscribe to outbound signals
    pub fn subscribe_signals(&self) -> broadcast::Receiver<NavigationSignal> {
        self.signals.subscribe()
    }

    /// Apply every queued inbound event, returning how many were applied
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.inbound_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next inbound event and apply it
    ///
    /// Returns `false` once no handle can deliver events any more.
    pub async fn process_next(&mut self) -> bool {
        match self.inbound_rx.recv().await {
            Some(event) => {
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Apply one inbound event
    pub fn apply(&mut self, event: InboundEvent) {
        match event {
            InboundEvent::Navigate(destination) => self.navigate(destination),
            InboundEvent::Present(destination) => {
                self.present(destination);
            }
            InboundEvent::Dismiss => {
                self.dismiss();
            }
            InboundEvent::GoBack => {
                self.go_back();
            }
            InboundEvent::PopToRoot => {
                self.pop_to_root();
            }
            InboundEvent::SelectTab(tab) => self.navigate_to_tab(tab),
            InboundEvent::OpenUrl(url) => self.open_url(&url),
            InboundEvent::ContentResolved { request, entity } => {
                self.content_resolved(request, entity)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// The full navigation state
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The selected tab
    pub fn selected_tab(&self) -> Tab {
        self.state.selected_tab()
    }

    /// Push stack of the selected tab, bottom to top
    pub fn stack(&self) -> &[StackEntry] {
        self.state.stack()
    }

    /// The presented modal
    pub fn presented_modal(&self) -> Option<&Destination> {
        self.state.presented_modal()
    }

    /// The modal if presented, else the top of the stack
    pub fn current_destination(&self) -> Option<&Destination> {
        self.state.current_destination()
    }

    /// Whether [`go_back`](Self::go_back) would change anything
    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    /// Navigation history
    pub fn history(&self) -> &HistoryLedger {
        self.state.history()
    }

    /// The ten most recent destinations, most recent first
    pub fn recent_destinations(&self) -> Vec<Destination> {
        self.state.history().recent_destinations()
    }

    /// Content lookup still waiting for an answer
    pub fn pending_content(&self) -> Option<&ContentRequest> {
        self.pending_content.as_ref()
    }

    /// App-scheme link for a destination
    pub fn create_deep_link(&self, destination: &Destination) -> Option<String> {
        self.links.deep_link(destination)
    }

    /// Public web URL for a destination
    pub fn share_url(&self, destination: &Destination) -> Option<String> {
        self.links.share_url(destination)
    }

    /// Rewrite an app-scheme link into a public web URL
    pub fn generate_share_url(&self, app_link: &str) -> Option<String> {
        self.links.public_url(app_link)
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Navigate to any destination
    ///
    /// Content is pushed, modals are presented, `Downloads` selects the
    /// downloads tab, deep links go through the router and share payloads are
    /// handed to the share collaborator.
    pub fn navigate(&mut self, destination: Destination) {
        tracing::info!(destination = %destination, "navigate");

        match destination {
            Destination::TalkDetail(_)
            | Destination::ConferenceDetail(_)
            | Destination::BlogDetail(_)
            | Destination::ResourceDetail(_) => {
                self.state.history_mut().record(destination.clone());
                self.state.push(destination);
                self.publish();
            }
            Destination::NowPlaying
            | Destination::Settings
            | Destination::PrivacySettings
            | Destination::AboutApp => {
                self.present(destination);
            }
            Destination::Downloads => {
                self.state.history_mut().record(Destination::Downloads);
                self.navigate_to_tab(Tab::Downloads);
            }
            Destination::DeepLink(url) => self.open_url(&url),
            Destination::Share(share_id) => {
                self.state.history_mut().record(Destination::Share(share_id.clone()));
                self.publish();
                tracing::info!(share_id = %share_id, "forwarding share payload");
                let _ = self.signals.send(NavigationSignal::ShareReceived { share_id });
            }
        }
    }

    /// Present a modal, replacing any modal already presented
    ///
    /// Returns `false` (and changes nothing) for non-modal destinations.
    pub fn present(&mut self, destination: Destination) -> bool {
        if !destination.is_modal() {
            tracing::warn!(destination = %destination, "refusing to present a non-modal destination");
            return false;
        }

        match self.state.presented_modal() {
            Some(previous) => tracing::info!(destination = %destination, replaced = %previous, "present"),
            None => tracing::info!(destination = %destination, "present"),
        }

        self.state.history_mut().record(destination.clone());
        self.state.set_modal(destination);
        self.publish();
        true
    }

    /// Dismiss the presented modal. Does nothing if there is none.
    pub fn dismiss(&mut self) -> bool {
        match self.state.take_modal() {
            Some(modal) => {
                tracing::info!(destination = %modal, "dismiss");
                self.publish();
                true
            }
            None => {
                tracing::debug!("dismiss with no modal presented");
                false
            }
        }
    }

    /// Go back one step: pop the stack if it has frames, otherwise dismiss
    /// the modal. Returns whether anything changed.
    pub fn go_back(&mut self) -> bool {
        if let Some(entry) = self.state.pop() {
            tracing::info!(destination = %entry.destination, depth = self.state.stack_depth(), "back: popped");
            self.publish();
            return true;
        }

        if let Some(modal) = self.state.take_modal() {
            tracing::info!(destination = %modal, "back: dismissed");
            self.publish();
            return true;
        }

        tracing::debug!("back with nothing to unwind");
        false
    }

    /// Clear the push stack. The modal and tab are untouched.
    pub fn pop_to_root(&mut self) -> usize {
        let removed = self.state.pop_to_root();
        if removed > 0 {
            tracing::info!(removed, "pop to root");
            self.publish();
        }
        removed
    }

    /// Select a tab, clear its push stack and persist the choice
    ///
    /// Tab switches are not recorded in history. Any pending content lookup
    /// is abandoned.
    pub fn navigate_to_tab(&mut self, tab: Tab) {
        let dropped = self.state.stack_depth();
        self.state.select_tab(tab);

        if let Some(request) = self.pending_content.take() {
            tracing::debug!(kind = %request.kind, id = %request.id, "abandoned pending content lookup");
        }

        save_tab(self.persistence.as_ref(), tab);
        tracing::info!(tab = ?tab, dropped_frames = dropped, "select tab");
        self.publish();
    }

    /// Route an external URL
    ///
    /// URLs that are not ours are logged and ignored.
    pub fn open_url(&mut self, url: &str) {
        match self.router.resolve(url) {
            Ok(actions) => {
                tracing::info!(url = %url, actions = actions.len(), "routing deep link");
                for action in actions {
                    self.apply_route_action(action);
                }
            }
            Err(e) => tracing::warn!(url = %url, error = %e, "rejected deep link"),
        }
    }

    fn apply_route_action(&mut self, action: RouteAction) {
        match action {
            RouteAction::SelectTab(tab) => self.navigate_to_tab(tab),
            RouteAction::Navigate(destination) => self.navigate(destination),
            RouteAction::Present(destination) => {
                self.present(destination);
            }
            RouteAction::RequestContent(request) => self.request_content(request),
        }
    }

    fn request_content(&mut self, request: ContentRequest) {
        tracing::info!(kind = %request.kind, id = %request.id, "requesting content lookup");
        self.pending_content = Some(request.clone());
        let _ = self.signals.send(NavigationSignal::SearchContent(request));
    }

    /// Finish a content lookup started by a deep link
    ///
    /// A successful lookup for the pending request navigates to the detail
    /// screen. A failed one only clears the request; the tab switch stays.
    /// Answers for anything other than the pending request are ignored.
    pub fn content_resolved(&mut self, request: ContentRequest, entity: Option<EntityRef>) {
        if self.pending_content.as_ref() != Some(&request) {
            tracing::warn!(kind = %request.kind, id = %request.id, "ignoring resolution for content that is not pending");
            return;
        }
        self.pending_content = None;

        match entity {
            Some(entity) => {
                tracing::info!(kind = %request.kind, id = %entity.id, "content resolved");
                self.navigate(request.kind.detail(entity));
            }
            None => {
                tracing::warn!(kind = %request.kind, id = %request.id, "content lookup failed");
            }
        }
    }

    /// Empty the history ledger
    pub fn clear_history(&mut self) {
        self.state.history_mut().clear();
        tracing::debug!("history cleared");
        self.publish();
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.state.clone());
    }
}
