//! Recipient typeahead for the compose box.

use crate::models::UserId;
use crate::people::{People, UserDirectory};

/// One typeahead row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub user_id: UserId,
    /// Full name, disambiguated with the user id when another user shares it.
    pub label: String,
}

/// Recipient suggestions for a query string.
///
/// The empty query matches everyone - clearing the input shows the full
/// candidate list rather than nothing. Non-empty queries match
/// case-insensitively anywhere in the name, with name-prefix matches ranked
/// first. Deactivated users and the viewer are never suggested.
pub fn recipient_suggestions(people: &People, query: &str) -> Vec<Suggestion> {
    let query = query.trim().to_lowercase();
    let viewer = people.current_user_id();

    let mut ranked: Vec<(u8, String, UserId)> = people
        .iter()
        .filter(|p| p.is_active && Some(p.user_id) != viewer)
        .filter_map(|p| {
            let lowered = p.full_name.to_lowercase();
            let rank = if query.is_empty() || lowered.starts_with(&query) {
                0
            } else if lowered.contains(&query) {
                1
            } else {
                return None;
            };
            Some((rank, lowered, p.user_id))
        })
        .collect();

    ranked.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .filter_map(|(_, _, user_id)| {
            let label = people.unique_full_name(user_id)?;
            Some(Suggestion { user_id, label })
        })
        .collect()
}
