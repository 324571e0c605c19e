pub mod channels;
pub mod compose;
pub mod constants;
pub mod dm_list;
pub mod models;
pub mod people;
pub mod recent;
pub mod store;
pub mod typeahead;
pub mod unread;

// Re-export the main types at crate root for convenience
pub use channels::{ChannelDirectory, ChannelSections};
pub use compose::ComposeError;
pub use dm_list::{ConversationSummary, DmListInfo};
pub use models::{Channel, ComposeDraft, ConversationKey, DraftStore, Person, UserId};
pub use people::{People, UserDirectory};
pub use recent::RecencyLedger;
pub use store::ChatStore;
pub use typeahead::Suggestion;
pub use unread::{UnreadCounter, UnreadTracker};
