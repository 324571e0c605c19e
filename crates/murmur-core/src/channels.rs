//! Channel directory: subscriptions, participant counts, sidebar ordering.

use std::collections::HashMap;

use crate::models::{Channel, UserId};
use crate::people::UserDirectory;

/// Sidebar ordering of channels: pinned first, muted last, alphabetical
/// (case-insensitive) within each section. Holds channel ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelSections {
    pub pinned: Vec<u64>,
    pub normal: Vec<u64>,
    pub muted: Vec<u64>,
}

/// In-memory channel directory.
#[derive(Debug, Default)]
pub struct ChannelDirectory {
    by_id: HashMap<u64, Channel>,
}

impl ChannelDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite a channel record.
    pub fn add(&mut self, channel: Channel) {
        self.by_id.insert(channel.channel_id, channel);
    }

    pub fn get(&self, channel_id: u64) -> Option<&Channel> {
        self.by_id.get(&channel_id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Subscribe a user. Returns whether the subscription was new
    /// (subscribing twice is a no-op).
    pub fn subscribe(&mut self, channel_id: u64, user_id: UserId) -> bool {
        self.by_id
            .get_mut(&channel_id)
            .map(|c| c.subscribers.insert(user_id))
            .unwrap_or(false)
    }

    /// Unsubscribe a user. Returns whether a subscription was removed.
    pub fn unsubscribe(&mut self, channel_id: u64, user_id: UserId) -> bool {
        self.by_id
            .get_mut(&channel_id)
            .map(|c| c.subscribers.remove(&user_id))
            .unwrap_or(false)
    }

    /// Number of *active* subscribers of a channel. Deactivating a user drops
    /// them from every channel's count without touching the subscription
    /// itself, so reactivation restores the old counts.
    pub fn subscriber_count<D: UserDirectory>(&self, channel_id: u64, directory: &D) -> usize {
        self.by_id
            .get(&channel_id)
            .map(|c| {
                c.subscribers
                    .iter()
                    .filter(|&&id| directory.is_active(id))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Channels a user is subscribed to, alphabetical by name.
    pub fn channels_for_user(&self, user_id: UserId) -> Vec<&Channel> {
        let mut channels: Vec<&Channel> = self
            .by_id
            .values()
            .filter(|c| c.is_subscribed(user_id))
            .collect();
        channels.sort_by_key(|c| c.name.to_lowercase());
        channels
    }

    /// Sidebar sections in render order. A muted channel lands in the muted
    /// section even when pinned.
    pub fn sorted_sections(&self) -> ChannelSections {
        let mut channels: Vec<&Channel> = self.by_id.values().collect();
        channels.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.channel_id.cmp(&b.channel_id))
        });

        let mut sections = ChannelSections::default();
        for channel in channels {
            if channel.muted {
                sections.muted.push(channel.channel_id);
            } else if channel.pinned {
                sections.pinned.push(channel.channel_id);
            } else {
                sections.normal.push(channel.channel_id);
            }
        }
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;
    use crate::people::People;

    fn directory_with_users(n: u64) -> People {
        let mut people = People::new();
        for id in 1..=n {
            people.add(Person::new(id, format!("User {id}")));
        }
        people
    }

    fn channel(id: u64, name: &str) -> Channel {
        Channel::new(id, name)
    }

    #[test]
    fn subscribe_is_idempotent() {
        let mut channels = ChannelDirectory::new();
        channels.add(channel(1, "general"));

        assert!(channels.subscribe(1, 7));
        assert!(!channels.subscribe(1, 7));
        assert!(channels.unsubscribe(1, 7));
        assert!(!channels.unsubscribe(1, 7));
    }

    #[test]
    fn subscriber_count_covers_active_users_only() {
        let mut channels = ChannelDirectory::new();
        channels.add(channel(1, "general"));
        let mut people = directory_with_users(3);

        channels.subscribe(1, 1);
        channels.subscribe(1, 2);
        channels.subscribe(1, 3);
        assert_eq!(channels.subscriber_count(1, &people), 3);

        people.deactivate(2);
        assert_eq!(channels.subscriber_count(1, &people), 2);

        people.reactivate(2);
        assert_eq!(channels.subscriber_count(1, &people), 3);
    }

    #[test]
    fn deactivation_affects_every_channel_the_user_is_on() {
        let mut channels = ChannelDirectory::new();
        channels.add(channel(1, "general"));
        channels.add(channel(2, "design"));
        let mut people = directory_with_users(2);

        channels.subscribe(1, 1);
        channels.subscribe(2, 1);
        channels.subscribe(2, 2);

        people.deactivate(1);
        assert_eq!(channels.subscriber_count(1, &people), 0);
        assert_eq!(channels.subscriber_count(2, &people), 1);
    }

    #[test]
    fn unknown_subscribers_do_not_count() {
        let mut channels = ChannelDirectory::new();
        channels.add(channel(1, "general"));
        let people = directory_with_users(1);

        channels.subscribe(1, 1);
        channels.subscribe(1, 99);
        assert_eq!(channels.subscriber_count(1, &people), 1);
    }

    #[test]
    fn missing_channel_counts_zero_subscribers() {
        let channels = ChannelDirectory::new();
        let people = directory_with_users(1);
        assert_eq!(channels.subscriber_count(42, &people), 0);
    }

    #[test]
    fn sections_order_pinned_then_normal_then_muted() {
        let mut channels = ChannelDirectory::new();

        let mut design = channel(1, "design");
        design.pinned = true;
        let mut announce = channel(2, "Announce");
        announce.pinned = true;
        let general = channel(3, "general");
        let backend = channel(4, "backend");
        let mut noisy = channel(5, "noisy");
        noisy.muted = true;
        // Muted wins over pinned.
        let mut archive = channel(6, "Archive");
        archive.pinned = true;
        archive.muted = true;

        for c in [design, announce, general, backend, noisy, archive] {
            channels.add(c);
        }

        let sections = channels.sorted_sections();
        assert_eq!(sections.pinned, vec![2, 1]);
        assert_eq!(sections.normal, vec![4, 3]);
        assert_eq!(sections.muted, vec![6, 5]);
    }

    #[test]
    fn channels_for_user_sorted_by_name() {
        let mut channels = ChannelDirectory::new();
        channels.add(channel(1, "ops"));
        channels.add(channel(2, "Backend"));
        channels.subscribe(1, 7);
        channels.subscribe(2, 7);

        let names: Vec<&str> = channels
            .channels_for_user(7)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Backend", "ops"]);
    }
}
