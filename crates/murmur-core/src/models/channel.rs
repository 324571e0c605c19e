use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// One channel (stream) as the sidebar sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub channel_id: u64,
    pub name: String,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub muted: bool,
    #[serde(default)]
    pub subscribers: HashSet<UserId>,
}

impl Channel {
    pub fn new(channel_id: u64, name: impl Into<String>) -> Self {
        Self {
            channel_id,
            name: name.into(),
            pinned: false,
            muted: false,
            subscribers: HashSet::new(),
        }
    }

    pub fn is_subscribed(&self, user_id: UserId) -> bool {
        self.subscribers.contains(&user_id)
    }
}
