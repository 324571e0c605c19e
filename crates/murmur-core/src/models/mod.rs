pub mod channel;
pub mod conversation;
pub mod draft;
pub mod person;

pub use channel::Channel;
pub use conversation::ConversationKey;
pub use draft::{ComposeDraft, DraftStore};
pub use person::{Person, UserId};
