//! Field-level rules shared by the per-entity validators.
//!
//! Each form is checked in full before anything is reported: every broken
//! rule contributes one sentence to a [`Violations`] list, and the list is
//! joined into a single [`CoreError::Validation`] message.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateUrl;

use crate::error::CoreError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Accumulates human-readable rule violations for one form submission.
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` unless `ok` holds.
    pub fn check(&mut self, ok: bool, message: impl Into<String>) {
        if !ok {
            self.0.push(message.into());
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// `Ok(())` when nothing was recorded, otherwise one combined validation error.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.0.join(" ")))
        }
    }
}

/// True when `value` holds at least `min` characters (Unicode scalars, not bytes).
pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// True when `value` is an absolute `http` or `https` URL.
///
/// Other schemes (`javascript:`, `data:`, `mailto:`) are rejected: these
/// values end up in public `href` attributes.
pub fn is_http_url(value: &str) -> bool {
    let Some((scheme, _)) = value.split_once(':') else {
        return false;
    };
    (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
        && value.validate_url()
}

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// True when `value` is a site-relative path or an `http(s)` URL.
pub fn is_image_reference(value: &str) -> bool {
    value.starts_with('/') || value.starts_with("http://") || value.starts_with("https://")
}

/// Trim a raw form value, mapping blank input to `None`.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn violations_join_into_one_message() {
        let mut v = Violations::new();
        v.check(false, "First.");
        v.check(true, "Skipped.");
        v.push("Second.");

        assert_matches!(v.into_result(), Err(CoreError::Validation(msg)) if msg == "First. Second.");
    }

    #[test]
    fn empty_violations_are_ok() {
        assert!(Violations::new().into_result().is_ok());
    }

    #[test]
    fn min_chars_counts_characters_not_bytes() {
        assert!(has_min_chars("日本", 2));
        assert!(!has_min_chars("é", 2));
        assert!(has_min_chars("ab", 2));
    }

    #[test]
    fn http_urls() {
        assert!(is_http_url("https://example.com/profile"));
        assert!(is_http_url("HTTP://example.com"));
        assert!(!is_http_url("example.com"));
        assert!(!is_http_url(""));
    }

    #[test]
    fn script_and_other_schemes_are_not_http_urls() {
        assert!(!is_http_url("javascript:alert(1)"));
        assert!(!is_http_url("JavaScript://%0aalert(1)"));
        assert!(!is_http_url("data:text/html,<b>x</b>"));
        assert!(!is_http_url("mailto:someone@example.com"));
    }

    #[test]
    fn email_shape() {
        assert!(is_email("someone@example.com"));
        assert!(!is_email("someone@example"));
        assert!(!is_email("some one@example.com"));
        assert!(!is_email("@example.com"));
    }

    #[test]
    fn image_references() {
        assert!(is_image_reference("/images/shot.png"));
        assert!(is_image_reference("http://cdn.example.com/a.jpg"));
        assert!(is_image_reference("https://cdn.example.com/a.jpg"));
        assert!(!is_image_reference("images/shot.png"));
        assert!(!is_image_reference("ftp://example.com/a.jpg"));
    }

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank("  x  "), Some("x".to_string()));
        assert_eq!(non_blank("   "), None);
    }
}
