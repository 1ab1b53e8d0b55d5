//! Bounded navigation history
//!
//! The ledger keeps the most recent destinations for diagnostics and
//! analytics. It is not used to replay navigation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::destination::Destination;

/// Maximum number of entries kept in the ledger
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Number of entries returned by [`HistoryLedger::recent_destinations`]
pub const RECENT_DESTINATIONS: usize = 10;

/// A recorded navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Where the user went
    pub destination: Destination,
    /// When the navigation happened
    pub recorded_at: DateTime<Utc>,
}

/// Append-only history capped at [`MAX_HISTORY_ENTRIES`], oldest evicted first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryLedger {
    entries: VecDeque<HistoryEntry>,
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self { entries: VecDeque::with_capacity(MAX_HISTORY_ENTRIES) }
    }
}

impl HistoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a destination, evicting the oldest entry past the cap
    pub fn record(&mut self, destination: Destination) {
        self.entries.push_back(HistoryEntry { destination, recorded_at: Utc::now() });
        self.enforce_cap();
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Up to `limit` destinations, most recent first
    pub fn recent(&self, limit: usize) -> Vec<Destination> {
        self.entries.iter().rev().take(limit).map(|entry| entry.destination.clone()).collect()
    }

    /// The ten most recent destinations, most recent first
    pub fn recent_destinations(&self) -> Vec<Destination> {
        self.recent(RECENT_DESTINATIONS)
    }

    /// The most recently recorded entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// The oldest entry still kept
    pub fn oldest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Drop entries past the cap, oldest first
    pub(crate) fn enforce_cap(&mut self) {
        while self.entries.len() > MAX_HISTORY_ENTRIES {
            self.entries.pop_front();
        }
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&HistoryEntry) -> bool) {
        self.entries.retain(keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::ContentKind;

    fn talk(n: usize) -> Destination {
        Destination::content(ContentKind::Talk, n.to_string())
    }

    #[test]
    fn test_record_preserves_order() {
        let mut ledger = HistoryLedger::new();
        ledger.record(Destination::Settings);
        ledger.record(talk(1));

        let recorded: Vec<_> = ledger.entries().map(|e| e.destination.clone()).collect();
        assert_eq!(recorded, vec![Destination::Settings, talk(1)]);
        assert_eq!(ledger.latest().map(|e| &e.destination), Some(&talk(1)));
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut ledger = HistoryLedger::new();
        for n in 0..=MAX_HISTORY_ENTRIES {
            ledger.record(talk(n));
        }

        assert_eq!(ledger.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(ledger.oldest().map(|e| &e.destination), Some(&talk(1)));
        assert_eq!(ledger.latest().map(|e| &e.destination), Some(&talk(MAX_HISTORY_ENTRIES)));
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut ledger = HistoryLedger::new();
        for n in 0..25 {
            ledger.record(talk(n));
        }

        let recent = ledger.recent_destinations();
        assert_eq!(recent.len(), RECENT_DESTINATIONS);
        assert_eq!(recent[0], talk(24));
        assert_eq!(recent[9], talk(15));
    }

    #[test]
    fn test_recent_with_few_entries() {
        let mut ledger = HistoryLedger::new();
        ledger.record(Destination::NowPlaying);
        assert_eq!(ledger.recent(10), vec![Destination::NowPlaying]);
        assert!(HistoryLedger::new().recent_destinations().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut ledger = HistoryLedger::new();
        ledger.record(Destination::Downloads);
        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_oversized_ledger_is_trimmed() {
        let mut ledger = HistoryLedger::new();
        for n in 0..MAX_HISTORY_ENTRIES + 5 {
            ledger.entries.push_back(HistoryEntry { destination: talk(n), recorded_at: Utc::now() });
        }

        ledger.enforce_cap();
        assert_eq!(ledger.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(ledger.oldest().map(|e| &e.destination), Some(&talk(5)));
    }
}
