use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use murmur_core::models::{Channel, Person, UserId};
use murmur_core::store::ChatStore;

/// A replayable session: directory contents plus the message events that
/// build the conversation list.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub current_user_id: UserId,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub messages: Vec<MessageEvent>,
}

#[derive(Debug, Deserialize)]
pub struct MessageEvent {
    pub user_ids: Vec<UserId>,
    pub marker: u64,
    /// Sent by the viewer rather than received.
    #[serde(default)]
    pub outgoing: bool,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    /// Replay the scenario into a fresh session store.
    pub fn into_store(self) -> ChatStore {
        let mut store = ChatStore::new();
        for person in self.people {
            store.people.add(person);
        }
        store.people.set_current_user(self.current_user_id);
        for channel in self.channels {
            store.channels.add(channel);
        }
        for event in &self.messages {
            if event.outgoing {
                store.record_outgoing_message(&event.user_ids, event.marker);
            } else {
                store.record_incoming_message(&event.user_ids, event.marker);
            }
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use murmur_core::models::ConversationKey;
    use murmur_core::unread::UnreadCounter;

    #[test]
    fn parses_a_minimal_scenario() {
        let scenario: Scenario = serde_json::from_str(
            r#"{
                "current_user_id": 100,
                "people": [
                    {"user_id": 100, "full_name": "Me"},
                    {"user_id": 1, "full_name": "Alice", "is_active": false}
                ],
                "messages": [{"user_ids": [1], "marker": 10}]
            }"#,
        )
        .expect("scenario should parse");

        assert_eq!(scenario.people.len(), 2);
        assert!(!scenario.people[1].is_active);
        assert!(!scenario.messages[0].outgoing);
    }

    #[test]
    fn replay_builds_the_session_state() {
        let scenario: Scenario = serde_json::from_str(
            r#"{
                "current_user_id": 100,
                "people": [
                    {"user_id": 100, "full_name": "Me"},
                    {"user_id": 1, "full_name": "Alice"}
                ],
                "messages": [
                    {"user_ids": [1], "marker": 10},
                    {"user_ids": [1], "marker": 11, "outgoing": true}
                ]
            }"#,
        )
        .expect("scenario should parse");

        let store = scenario.into_store();
        let key = ConversationKey::new([1]);
        assert_eq!(store.recent().marker_for(&key), Some(11));
        // Only the incoming message counts as unread.
        assert_eq!(store.unread().unread_count_for(&key), 1);
    }
}
