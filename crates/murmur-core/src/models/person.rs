use serde::{Deserialize, Serialize};

/// Server-assigned user identifier.
pub type UserId = u64;

/// One user record as the client sees it.
///
/// Owned by the people directory; the rest of the core only reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub user_id: UserId,
    pub full_name: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_bot: bool,
}

fn default_active() -> bool {
    true
}

impl Person {
    pub fn new(user_id: UserId, full_name: impl Into<String>) -> Self {
        Self {
            user_id,
            full_name: full_name.into(),
            is_active: true,
            is_bot: false,
        }
    }
}
