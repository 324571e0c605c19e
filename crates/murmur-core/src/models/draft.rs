use std::collections::HashMap;

use crate::models::ConversationKey;

/// Compose draft for one conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeDraft {
    pub key: ConversationKey,
    pub text: String,
    /// Activity marker at the time of the last save.
    pub last_modified: u64,
}

impl ComposeDraft {
    /// A draft is empty when its text is whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// In-memory draft store, one draft per conversation.
///
/// The editor calls [`DraftStore::autosave`] whenever the compose box loses
/// focus; a blur with cleared text drops the stored draft rather than keeping
/// an empty row around.
#[derive(Debug, Default)]
pub struct DraftStore {
    drafts: HashMap<ConversationKey, ComposeDraft>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Autosave on editor blur: non-empty text upserts, empty text deletes.
    pub fn autosave(&mut self, key: &ConversationKey, text: &str, marker: u64) {
        if text.trim().is_empty() {
            self.drafts.remove(key);
            return;
        }
        self.drafts.insert(
            key.clone(),
            ComposeDraft {
                key: key.clone(),
                text: text.to_string(),
                last_modified: marker,
            },
        );
    }

    pub fn load(&self, key: &ConversationKey) -> Option<&ComposeDraft> {
        self.drafts.get(key)
    }

    pub fn delete(&mut self, key: &ConversationKey) {
        self.drafts.remove(key);
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn clear(&mut self) {
        self.drafts.clear();
    }

    /// All drafts, most recently modified first.
    pub fn all_drafts(&self) -> Vec<&ComposeDraft> {
        let mut drafts: Vec<_> = self.drafts.values().collect();
        drafts.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        drafts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(ids: &[u64]) -> ConversationKey {
        ConversationKey::new(ids.iter().copied())
    }

    #[test]
    fn autosave_upserts_non_empty_text() {
        let mut store = DraftStore::new();
        store.autosave(&key(&[1]), "hello", 10);
        store.autosave(&key(&[1]), "hello again", 11);

        let draft = store.load(&key(&[1])).expect("draft should be stored");
        assert_eq!(draft.text, "hello again");
        assert_eq!(draft.last_modified, 11);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn autosave_with_cleared_text_removes_draft() {
        let mut store = DraftStore::new();
        store.autosave(&key(&[1]), "hello", 10);
        store.autosave(&key(&[1]), "   ", 11);
        assert!(store.load(&key(&[1])).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn blur_without_prior_draft_is_a_no_op() {
        let mut store = DraftStore::new();
        store.autosave(&key(&[1]), "", 10);
        assert!(store.is_empty());
    }

    #[test]
    fn all_drafts_sorted_by_last_modified_descending() {
        let mut store = DraftStore::new();
        store.autosave(&key(&[1]), "first", 10);
        store.autosave(&key(&[2]), "second", 30);
        store.autosave(&key(&[3]), "third", 20);

        let texts: Vec<&str> = store.all_drafts().iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "third", "first"]);
    }
}
