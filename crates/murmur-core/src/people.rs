//! People directory: user records, activation state, and display names.

use std::collections::HashMap;

use crate::models::{Person, UserId};

/// Read-only view of the user directory, as the projector and the compose
/// layer consume it. Passed explicitly so those layers are testable without
/// a fully populated session.
pub trait UserDirectory {
    /// Whether the user exists and is active. Ids the directory has never
    /// seen report `false`: a conversation with an uncertain participant is
    /// hidden rather than shown.
    fn is_active(&self, user_id: UserId) -> bool;

    fn full_name(&self, user_id: UserId) -> Option<String>;

    fn current_user_id(&self) -> Option<UserId>;
}

/// In-memory people directory - single source of truth for user records.
#[derive(Debug, Default)]
pub struct People {
    by_id: HashMap<UserId, Person>,
    current_user_id: Option<UserId>,
}

impl People {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite a user record.
    pub fn add(&mut self, person: Person) {
        self.by_id.insert(person.user_id, person);
    }

    pub fn set_current_user(&mut self, user_id: UserId) {
        self.current_user_id = Some(user_id);
    }

    pub fn get(&self, user_id: UserId) -> Option<&Person> {
        self.by_id.get(&user_id)
    }

    pub fn deactivate(&mut self, user_id: UserId) {
        if let Some(person) = self.by_id.get_mut(&user_id) {
            person.is_active = false;
        }
    }

    pub fn reactivate(&mut self, user_id: UserId) {
        if let Some(person) = self.by_id.get_mut(&user_id) {
            person.is_active = true;
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.by_id.values()
    }

    /// Whether more than one user shares this full name.
    pub fn is_duplicate_full_name(&self, full_name: &str) -> bool {
        self.by_id
            .values()
            .filter(|p| p.full_name == full_name)
            .take(2)
            .count()
            > 1
    }

    /// Display name for lists where names must be told apart: the plain full
    /// name, or "Name (id)" when another user shares it.
    pub fn unique_full_name(&self, user_id: UserId) -> Option<String> {
        let person = self.by_id.get(&user_id)?;
        if self.is_duplicate_full_name(&person.full_name) {
            Some(format!("{} ({})", person.full_name, person.user_id))
        } else {
            Some(person.full_name.clone())
        }
    }
}

impl UserDirectory for People {
    fn is_active(&self, user_id: UserId) -> bool {
        self.by_id.get(&user_id).map(|p| p.is_active).unwrap_or(false)
    }

    fn full_name(&self, user_id: UserId) -> Option<String> {
        self.by_id.get(&user_id).map(|p| p.full_name.clone())
    }

    fn current_user_id(&self) -> Option<UserId> {
        self.current_user_id
    }
}
