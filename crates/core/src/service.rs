//! Rules for the services offered on the public site.

use crate::error::CoreError;
use crate::validation::{has_min_chars, Violations};

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Validate trimmed service fields, reporting every broken rule at once.
pub fn validate_service(name: &str, description: &str) -> Result<(), CoreError> {
    let mut violations = Violations::new();
    violations.check(
        has_min_chars(name, MIN_NAME_CHARS),
        "Service name must be at least 2 characters.",
    );
    violations.check(
        has_min_chars(description, MIN_DESCRIPTION_CHARS),
        "Description must be at least 10 characters.",
    );
    violations.into_result()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_minimum_lengths() {
        assert!(validate_service("QA", "0123456789").is_ok());
    }

    #[test]
    fn combines_both_errors() {
        let err = validate_service("A", "short").unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(msg) if msg == "Service name must be at least 2 characters. \
                                                 Description must be at least 10 characters."
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_matches!(
            validate_service("", "A long enough description"),
            Err(CoreError::Validation(msg)) if msg.starts_with("Service name")
        );
    }
}
