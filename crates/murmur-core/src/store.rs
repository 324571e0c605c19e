//! Session-level data store.

use tracing::instrument;

use crate::channels::ChannelDirectory;
use crate::dm_list::{self, DmListInfo};
use crate::models::{ConversationKey, DraftStore, UserId};
use crate::people::{People, UserDirectory};
use crate::recent::RecencyLedger;
use crate::unread::UnreadTracker;

/// Single source of truth for one client session.
///
/// Rebuilt from server-sent events at login and updated incrementally as
/// they arrive. All access is call-and-return on the UI event loop; there is
/// no background mutation.
#[derive(Debug, Default)]
pub struct ChatStore {
    pub people: People,
    pub channels: ChannelDirectory,
    recent: RecencyLedger,
    unread: UnreadTracker,
    drafts: DraftStore,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A message from someone else arrived for the given participant set.
    #[instrument(skip(self))]
    pub fn record_incoming_message(&mut self, user_ids: &[UserId], marker: u64) {
        let key = ConversationKey::new(user_ids.iter().copied());
        self.unread.add_unread(&key);
        self.recent.insert_key(key, marker);
    }

    /// A message the viewer sent. Messages to others are already read;
    /// a message to yourself stays unread until the conversation is opened.
    #[instrument(skip(self))]
    pub fn record_outgoing_message(&mut self, user_ids: &[UserId], marker: u64) {
        let key = ConversationKey::new(user_ids.iter().copied());
        if self.is_self_conversation(&key) {
            self.unread.add_unread(&key);
        }
        self.recent.insert_key(key, marker);
    }

    /// The viewer opened a conversation.
    pub fn mark_conversation_read(&mut self, user_ids: &[UserId]) {
        let key = ConversationKey::new(user_ids.iter().copied());
        self.unread.mark_read(&key);
    }

    /// The direct-message sidebar list for the current state.
    pub fn dm_list_info(&self, zoomed: bool) -> DmListInfo {
        dm_list::get_list_info(&self.recent, &self.people, &self.unread, zoomed)
    }

    /// Compose box lost focus: persist (or drop) the draft for the
    /// conversation being written to.
    pub fn save_draft_on_blur(&mut self, user_ids: &[UserId], text: &str, marker: u64) {
        let key = ConversationKey::new(user_ids.iter().copied());
        self.drafts.autosave(&key, text, marker);
    }

    pub fn recent(&self) -> &RecencyLedger {
        &self.recent
    }

    pub fn unread(&self) -> &UnreadTracker {
        &self.unread
    }

    pub fn drafts(&self) -> &DraftStore {
        &self.drafts
    }

    /// Drop all per-session conversation state, keeping the directories.
    pub fn reset(&mut self) {
        self.recent.clear();
        self.unread.clear();
        self.drafts.clear();
    }

    fn is_self_conversation(&self, key: &ConversationKey) -> bool {
        match self.people.current_user_id() {
            Some(id) => key.user_ids() == [id],
            None => false,
        }
    }
}
