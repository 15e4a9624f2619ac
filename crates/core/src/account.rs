//! Admin account rules.

use crate::error::CoreError;

pub const MIN_PASSWORD_CHARS: usize = 6;

/// Shown when the store rejects a username that is already taken.
pub const DUPLICATE_USERNAME_MESSAGE: &str = "That username already exists. Choose another.";

/// The error reported when `username` is already taken.
pub fn duplicate_username() -> CoreError {
    CoreError::Conflict(DUPLICATE_USERNAME_MESSAGE.into())
}

/// Validate a new admin account. `username` is expected trimmed; the
/// password is taken as typed.
pub fn validate_new_account(username: &str, password: &str) -> Result<(), CoreError> {
    if username.is_empty() || password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(CoreError::Validation(
            "Username and password are required. Password must be at least 6 characters."
                .into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn duplicate_username_is_a_conflict() {
        let err = duplicate_username();
        assert_matches!(&err, CoreError::Conflict(_));
        assert_eq!(err.message(), DUPLICATE_USERNAME_MESSAGE);
    }

    #[test]
    fn accepts_six_character_password() {
        assert!(validate_new_account("editor", "abcdef").is_ok());
    }

    #[test]
    fn rejects_short_password_or_blank_username() {
        assert!(validate_new_account("editor", "abcde").is_err());
        assert!(validate_new_account("", "long-enough").is_err());
    }
}
