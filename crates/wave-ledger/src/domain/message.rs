//! Wave message validation.

use super::errors::InvalidMessageReason;

/// Accepts non-blank messages of at most `max_len` characters.
pub fn validate_message(message: &str, max_len: usize) -> Result<(), InvalidMessageReason> {
    if message.trim().is_empty() {
        return Err(InvalidMessageReason::Empty);
    }
    let len = message.chars().count();
    if len > max_len {
        return Err(InvalidMessageReason::TooLong { len, max: max_len });
    }
    Ok(())
}
