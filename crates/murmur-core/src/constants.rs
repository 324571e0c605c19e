//! Application-wide constants
//!
//! Centralized location for limits and labels that are used across
//! multiple modules.

/// Maximum conversations shown in the collapsed direct-message sidebar.
pub const MAX_CONVERSATIONS_TO_SHOW: usize = 8;

/// Collapsed-sidebar allowance for conversations that still have unread
/// messages. Rows past [`MAX_CONVERSATIONS_TO_SHOW`] stay visible up to this
/// index while unread.
pub const MAX_CONVERSATIONS_TO_SHOW_WITH_UNREADS: usize = 15;

/// Upper bound on a compose message body, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 10_000;

/// Label used when a participant is missing from the people directory.
pub const UNKNOWN_USER_NAME: &str = "Unknown user";
