//! Most-recent-activity ledger for direct-message conversations.

use std::collections::HashMap;

use crate::models::{ConversationKey, UserId};

#[derive(Debug, Clone, Copy)]
struct RecencyEntry {
    marker: u64,
    /// Insertion sequence, used to break marker ties (latest insert wins).
    seq: u64,
}

/// One entry per distinct participant set, holding the marker of its most
/// recent activity. Rebuilt from server events at session start and updated
/// incrementally as messages arrive.
#[derive(Debug, Default)]
pub struct RecencyLedger {
    entries: HashMap<ConversationKey, RecencyEntry>,
    insert_seq: u64,
}

impl RecencyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register activity for the conversation with the given participants.
    ///
    /// An existing entry is only moved forward: a marker older than the one
    /// already stored is ignored, an equal marker counts as newer.
    pub fn insert(&mut self, user_ids: impl IntoIterator<Item = UserId>, marker: u64) {
        self.insert_key(ConversationKey::new(user_ids), marker);
    }

    pub fn insert_key(&mut self, key: ConversationKey, marker: u64) {
        if key.is_empty() {
            return;
        }
        self.insert_seq += 1;
        let seq = self.insert_seq;
        match self.entries.get_mut(&key) {
            Some(entry) if entry.marker > marker => {}
            Some(entry) => {
                entry.marker = marker;
                entry.seq = seq;
            }
            None => {
                self.entries.insert(key, RecencyEntry { marker, seq });
            }
        }
    }

    /// Empty the ledger (session reset).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn marker_for(&self, key: &ConversationKey) -> Option<u64> {
        self.entries.get(key).map(|e| e.marker)
    }

    /// All conversations ordered by marker descending; conversations sharing
    /// a marker come out most-recently-inserted first.
    pub fn all_conversations_ordered(&self) -> Vec<(ConversationKey, u64)> {
        let mut items: Vec<(&ConversationKey, RecencyEntry)> =
            self.entries.iter().map(|(k, e)| (k, *e)).collect();
        items.sort_by(|a, b| b.1.marker.cmp(&a.1.marker).then(b.1.seq.cmp(&a.1.seq)));
        items
            .into_iter()
            .map(|(key, entry)| (key.clone(), entry.marker))
            .collect()
    }
}
