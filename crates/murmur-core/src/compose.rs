//! Compose-box validation for direct messages.

use thiserror::Error;

use crate::constants::MAX_MESSAGE_LENGTH;
use crate::models::UserId;
use crate::people::UserDirectory;

/// Banner shown when a direct-message draft cannot be sent.
///
/// Checks run in a fixed order and the first failure is reported: recipient
/// problems before content problems, so fixing the banner never reveals an
/// earlier one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("Please specify at least one valid recipient.")]
    MissingRecipients,
    #[error("Unknown recipient id {0}.")]
    UnknownRecipient(UserId),
    #[error("You cannot send messages to deactivated users.")]
    DeactivatedRecipient(String),
    #[error("You have nothing to send!")]
    EmptyMessage,
    #[error("Message length shouldn't be greater than {max} characters.")]
    MessageTooLong { max: usize },
}

/// Validate a direct-message draft against the directory.
///
/// The viewer themself is always a valid recipient (self-DM).
pub fn validate_dm<D: UserDirectory>(
    directory: &D,
    recipient_ids: &[UserId],
    content: &str,
) -> Result<(), ComposeError> {
    if recipient_ids.is_empty() {
        return Err(ComposeError::MissingRecipients);
    }

    for &id in recipient_ids {
        match directory.full_name(id) {
            None => return Err(ComposeError::UnknownRecipient(id)),
            Some(name) => {
                if !directory.is_active(id) {
                    return Err(ComposeError::DeactivatedRecipient(name));
                }
            }
        }
    }

    if content.trim().is_empty() {
        return Err(ComposeError::EmptyMessage);
    }

    if content.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(ComposeError::MessageTooLong {
            max: MAX_MESSAGE_LENGTH,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;
    use crate::people::People;

    fn sample_people() -> People {
        let mut people = People::new();
        people.add(Person::new(100, "Me Myself"));
        people.set_current_user(100);
        people.add(Person::new(1, "Alice"));
        people.add(Person::new(2, "Bob"));
        people.deactivate(2);
        people
    }

    #[test]
    fn valid_message_passes() {
        let people = sample_people();
        assert_eq!(validate_dm(&people, &[1], "hello"), Ok(()));
    }

    #[test]
    fn self_dm_is_allowed() {
        let people = sample_people();
        assert_eq!(validate_dm(&people, &[100], "note to self"), Ok(()));
    }

    #[test]
    fn no_recipients_is_reported_first() {
        let people = sample_people();
        // Even with an empty body, the recipient banner wins.
        assert_eq!(
            validate_dm(&people, &[], ""),
            Err(ComposeError::MissingRecipients)
        );
    }

    #[test]
    fn unknown_recipient_is_reported_before_content_problems() {
        let people = sample_people();
        assert_eq!(
            validate_dm(&people, &[77], ""),
            Err(ComposeError::UnknownRecipient(77))
        );
    }

    #[test]
    fn deactivated_recipient_is_named_in_the_banner() {
        let people = sample_people();
        let err = validate_dm(&people, &[1, 2], "hello").unwrap_err();
        assert_eq!(err, ComposeError::DeactivatedRecipient("Bob".to_string()));
        assert_eq!(
            err.to_string(),
            "You cannot send messages to deactivated users."
        );
    }

    #[test]
    fn empty_body_is_rejected_after_recipients_check_out() {
        let people = sample_people();
        assert_eq!(
            validate_dm(&people, &[1], "   \n  "),
            Err(ComposeError::EmptyMessage)
        );
    }

    #[test]
    fn over_long_body_is_rejected() {
        let people = sample_people();
        let body = "x".repeat(MAX_MESSAGE_LENGTH + 1);
        assert_eq!(
            validate_dm(&people, &[1], &body),
            Err(ComposeError::MessageTooLong {
                max: MAX_MESSAGE_LENGTH
            })
        );
    }

    #[test]
    fn body_at_the_limit_passes() {
        let people = sample_people();
        let body = "x".repeat(MAX_MESSAGE_LENGTH);
        assert_eq!(validate_dm(&people, &[1], &body), Ok(()));
    }
}
