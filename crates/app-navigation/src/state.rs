//! Navigation state
//!
//! [`NavigationState`] is the single aggregate the coordinator owns: the
//! selected tab, the push stack of that tab, at most one presented modal and
//! the bounded history ledger. Mutators are crate-private so the invariants
//! can only be changed through the coordinator's transitions:
//! - the push stack holds content destinations only
//! - the presented modal, if any, is a modal destination
//! - selecting a tab empties the push stack
//! - meta destinations are never stored

use serde::{Deserialize, Serialize};

use crate::destination::Destination;
use crate::history::HistoryLedger;
use crate::tab::Tab;

// =============================================================================
// Stack Entries
// =============================================================================

/// A push stack frame
///
/// Pushing the same destination twice produces two frames with different keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The destination shown by this frame
    pub destination: Destination,
    /// Unique key for this frame
    pub key: String,
}

impl StackEntry {
    /// Create a new stack frame
    pub fn new(destination: Destination) -> Self {
        Self { destination, key: uuid::Uuid::new_v4().to_string() }
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigation state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    selected_tab: Tab,
    #[serde(default)]
    stack: Vec<StackEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    presented_modal: Option<Destination>,
    #[serde(default)]
    history: HistoryLedger,
}

impl NavigationState {
    /// Create a state on the home tab
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state on the given tab
    pub fn with_tab(tab: Tab) -> Self {
        Self { selected_tab: tab, ..Self::default() }
    }

    /// The selected tab
    pub fn selected_tab(&self) -> Tab {
        self.selected_tab
    }

    /// Push stack frames, bottom to top
    pub fn stack(&self) -> &[StackEntry] {
        &self.stack
    }

    /// Number of pushed frames
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// The presented modal
    pub fn presented_modal(&self) -> Option<&Destination> {
        self.presented_modal.as_ref()
    }

    /// Navigation history
    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    /// What the user is looking at: the modal if one is presented, else the
    /// top of the push stack. `None` means the tab root.
    pub fn current_destination(&self) -> Option<&Destination> {
        self.presented_modal
            .as_ref()
            .or_else(|| self.stack.last().map(|entry| &entry.destination))
    }

    /// Whether a back navigation would change anything
    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty() || self.presented_modal.is_some()
    }

    /// Check every structural invariant
    pub fn is_consistent(&self) -> bool {
        self.stack.iter().all(|entry| entry.destination.is_content())
            && self.presented_modal.as_ref().map_or(true, Destination::is_modal)
            && self.history.len() <= crate::history::MAX_HISTORY_ENTRIES
            && self.history.entries().all(|entry| entry.destination.records_in_history())
    }

    /// Drop whatever violates an invariant. Used when restoring a snapshot.
    pub fn sanitized(mut self) -> Self {
        let frames_before = self.stack.len();
        self.stack.retain(|entry| entry.destination.is_content());
        if self.stack.len() != frames_before {
            tracing::warn!(
                dropped = frames_before - self.stack.len(),
                "dropped non-content frames from restored stack"
            );
        }

        if let Some(modal) = self.presented_modal.take() {
            if modal.is_modal() {
                self.presented_modal = Some(modal);
            } else {
                tracing::warn!(destination = %modal, "dropped non-modal destination from restored state");
            }
        }

        self.history.retain(|entry| entry.destination.records_in_history());
        self.history.enforce_cap();
        self
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Push a content destination. Anything else is refused.
    pub(crate) fn push(&mut self, destination: Destination) -> bool {
        if !destination.is_content() {
            return false;
        }
        self.stack.push(StackEntry::new(destination));
        true
    }

    pub(crate) fn pop(&mut self) -> Option<StackEntry> {
        self.stack.pop()
    }

    /// Clear the push stack, returning how many frames were removed
    pub(crate) fn pop_to_root(&mut self) -> usize {
        let removed = self.stack.len();
        self.stack.clear();
        removed
    }

    /// Replace the presented modal. Non-modal destinations are refused.
    pub(crate) fn set_modal(&mut self, destination: Destination) -> bool {
        if !destination.is_modal() {
            return false;
        }
        self.presented_modal = Some(destination);
        true
    }

    pub(crate) fn take_modal(&mut self) -> Option<Destination> {
        self.presented_modal.take()
    }

    /// Select a tab. The push stack is always emptied, even when re-selecting
    /// the current tab.
    pub(crate) fn select_tab(&mut self, tab: Tab) {
        self.selected_tab = tab;
        self.stack.clear();
    }

    pub(crate) fn history_mut(&mut self) -> &mut HistoryLedger {
        &mut self.history
    }
}
