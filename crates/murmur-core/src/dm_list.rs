//! Direct-message sidebar projection.
//!
//! Turns the recency ledger into the ordered row list the sidebar renders,
//! applying the deactivated-participant filter and the visible-window policy.

use tracing::instrument;

use crate::constants::{
    MAX_CONVERSATIONS_TO_SHOW, MAX_CONVERSATIONS_TO_SHOW_WITH_UNREADS, UNKNOWN_USER_NAME,
};
use crate::models::ConversationKey;
use crate::people::UserDirectory;
use crate::recent::RecencyLedger;
use crate::unread::UnreadCounter;

/// One row of the direct-message sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSummary {
    pub key: ConversationKey,
    pub latest_marker: u64,
    pub unread_count: u64,
    /// Comma-joined display names of the other participants; the viewer's
    /// own name for a conversation with themself.
    pub recipients: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DmListInfo {
    pub conversations_to_be_shown: Vec<ConversationSummary>,
    /// Unread total across conversations that exist but are not shown in the
    /// collapsed view - the badge on the "more conversations" row. Zooming
    /// reveals exactly these, so the badge goes to zero in the zoomed view.
    pub more_conversations_unread_count: u64,
}

/// Project the sidebar list for the current ledger and directory state.
///
/// Collapsed (`zoomed == false`): conversations with a deactivated or unknown
/// participant are hidden, the first [`MAX_CONVERSATIONS_TO_SHOW`] survivors
/// are shown, and survivors past that stay visible up to
/// [`MAX_CONVERSATIONS_TO_SHOW_WITH_UNREADS`] while they have unreads.
/// Zoomed: every conversation is shown, unfiltered and untruncated.
///
/// Nothing is cached; reactivating a user is reflected on the next call.
#[instrument(skip(ledger, directory, unread))]
pub fn get_list_info<D, U>(
    ledger: &RecencyLedger,
    directory: &D,
    unread: &U,
    zoomed: bool,
) -> DmListInfo
where
    D: UserDirectory,
    U: UnreadCounter,
{
    let conversations = ledger.all_conversations_ordered();

    let mut shown = Vec::new();
    let mut more_unread = 0u64;
    let mut visible_idx = 0usize;

    for (key, marker) in conversations {
        let num_unread = unread.unread_count_for(&key);

        if zoomed {
            shown.push(summarize(key, marker, num_unread, directory));
            continue;
        }

        if has_deactivated_participant(&key, directory) {
            // Hidden rows still count toward the zoom badge.
            more_unread += num_unread;
            continue;
        }

        let show = visible_idx < MAX_CONVERSATIONS_TO_SHOW
            || (visible_idx < MAX_CONVERSATIONS_TO_SHOW_WITH_UNREADS && num_unread > 0);
        if show {
            shown.push(summarize(key, marker, num_unread, directory));
        } else {
            more_unread += num_unread;
        }
        visible_idx += 1;
    }

    DmListInfo {
        conversations_to_be_shown: shown,
        more_conversations_unread_count: more_unread,
    }
}

fn has_deactivated_participant<D: UserDirectory>(key: &ConversationKey, directory: &D) -> bool {
    key.user_ids().iter().any(|&id| !directory.is_active(id))
}

fn summarize<D: UserDirectory>(
    key: ConversationKey,
    marker: u64,
    unread_count: u64,
    directory: &D,
) -> ConversationSummary {
    let recipients = recipients_label(&key, directory);
    ConversationSummary {
        key,
        latest_marker: marker,
        unread_count,
        recipients,
    }
}

/// Human-readable recipient label for a conversation.
///
/// Names of everyone except the viewer, alphabetically (case-insensitive),
/// comma-joined. A conversation whose only participant is the viewer is
/// labeled with the viewer's own name.
pub fn recipients_label<D: UserDirectory>(key: &ConversationKey, directory: &D) -> String {
    let viewer = directory.current_user_id();

    let mut names: Vec<String> = key
        .user_ids()
        .iter()
        .filter(|&&id| Some(id) != viewer)
        .map(|&id| name_or_unknown(directory, id))
        .collect();

    if names.is_empty() {
        return match viewer {
            Some(id) => name_or_unknown(directory, id),
            None => UNKNOWN_USER_NAME.to_string(),
        };
    }

    names.sort_by_key(|name| name.to_lowercase());
    names.join(", ")
}

fn name_or_unknown<D: UserDirectory>(directory: &D, id: crate::models::UserId) -> String {
    directory
        .full_name(id)
        .unwrap_or_else(|| UNKNOWN_USER_NAME.to_string())
}
