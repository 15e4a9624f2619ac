//! Contact settings, their built-in defaults, and custom contact link rules.
//!
//! The settings row is a singleton. When it has never been saved, readers
//! see [`ContactSettings::defaults`]; once saved, the stored values are used
//! verbatim so an admin can clear an individual social link.

use serde::Serialize;

use crate::error::CoreError;
use crate::validation::{has_min_chars, is_http_url, is_email, non_blank, Violations};

pub const DEFAULT_EMAIL: &str = "hello@example.com";
pub const DEFAULT_PHONE: &str = "+1 555 0100";
pub const DEFAULT_FACEBOOK: &str = "https://www.facebook.com/";
pub const DEFAULT_LINKEDIN: &str = "https://www.linkedin.com/";
pub const DEFAULT_GITHUB: &str = "https://github.com/";
pub const DEFAULT_INSTAGRAM: &str = "https://www.instagram.com/";

/// Icon class stored for contact links submitted without one.
pub const DEFAULT_LINK_ICON: &str = "fa-solid fa-link";

pub const MIN_LINK_LABEL_CHARS: usize = 2;

/// Site-wide contact and social settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSettings {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub instagram: Option<String>,
}

impl ContactSettings {
    pub fn defaults() -> Self {
        Self {
            email: Some(DEFAULT_EMAIL.into()),
            phone: Some(DEFAULT_PHONE.into()),
            facebook: Some(DEFAULT_FACEBOOK.into()),
            linkedin: Some(DEFAULT_LINKEDIN.into()),
            github: Some(DEFAULT_GITHUB.into()),
            instagram: Some(DEFAULT_INSTAGRAM.into()),
        }
    }

    /// Settings as readers see them: the stored row if any, otherwise the defaults.
    pub fn resolve(stored: Option<Self>) -> Self {
        stored.unwrap_or_else(Self::defaults)
    }

    /// Build settings from raw form values, trimming and dropping blanks.
    pub fn from_form(
        email: &str,
        phone: &str,
        facebook: &str,
        linkedin: &str,
        github: &str,
        instagram: &str,
    ) -> Self {
        Self {
            email: non_blank(email),
            phone: non_blank(phone),
            facebook: non_blank(facebook),
            linkedin: non_blank(linkedin),
            github: non_blank(github),
            instagram: non_blank(instagram),
        }
    }

    /// Social profile fields in display order, paired with their form field names.
    pub fn social_links(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("facebook", self.facebook.as_deref()),
            ("linkedin", self.linkedin.as_deref()),
            ("github", self.github.as_deref()),
            ("instagram", self.instagram.as_deref()),
        ]
    }

    /// Email and phone are required; social fields are optional but must be URLs.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut violations = Violations::new();

        match self.email.as_deref() {
            None => violations.push("Email is required."),
            Some(email) => {
                violations.check(is_email(email), "Please provide a valid email address.")
            }
        }

        violations.check(self.phone.is_some(), "Phone number is required.");

        for (field, value) in self.social_links() {
            if let Some(url) = value {
                violations.check(
                    is_http_url(url),
                    format!("The {field} URL must be a valid URL (include http/https)."),
                );
            }
        }

        violations.into_result()
    }
}

/// Validate a trimmed custom contact link.
pub fn validate_contact_link(label: &str, url: &str) -> Result<(), CoreError> {
    let mut violations = Violations::new();
    violations.check(
        has_min_chars(label, MIN_LINK_LABEL_CHARS),
        "Label must be at least 2 characters.",
    );
    if url.is_empty() {
        violations.push("URL is required.");
    } else {
        violations.check(
            is_http_url(url),
            "Please provide a valid URL (include http/https).",
        );
    }
    violations.into_result()
}

/// The icon to store for a link: the trimmed input, or [`DEFAULT_LINK_ICON`].
pub fn link_icon_or_default(icon: &str) -> String {
    non_blank(icon).unwrap_or_else(|| DEFAULT_LINK_ICON.to_string())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn valid_settings() -> ContactSettings {
        ContactSettings::from_form(
            "me@example.com",
            "+1 555 0199",
            "https://facebook.com/me",
            "",
            "https://github.com/me",
            "",
        )
    }

    #[test]
    fn resolve_falls_back_to_defaults_only_without_a_row() {
        assert_eq!(ContactSettings::resolve(None), ContactSettings::defaults());

        let stored = ContactSettings {
            email: Some("me@example.com".into()),
            ..ContactSettings::default()
        };
        let resolved = ContactSettings::resolve(Some(stored.clone()));
        assert_eq!(resolved, stored);
        assert_eq!(resolved.github, None);
    }

    #[test]
    fn from_form_trims_and_drops_blanks() {
        let s = ContactSettings::from_form("  me@example.com ", " 123 ", "", "   ", "", "");
        assert_eq!(s.email.as_deref(), Some("me@example.com"));
        assert_eq!(s.phone.as_deref(), Some("123"));
        assert_eq!(s.linkedin, None);
    }

    #[test]
    fn valid_settings_pass() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn missing_email_and_phone_are_reported_together() {
        let s = ContactSettings::from_form("", "", "", "", "", "");
        assert_matches!(
            s.validate(),
            Err(CoreError::Validation(msg)) if msg == "Email is required. Phone number is required."
        );
    }

    #[test]
    fn bad_email_and_bad_social_url() {
        let s = ContactSettings {
            email: Some("not-an-email".into()),
            linkedin: Some("linkedin.com/in/me".into()),
            ..valid_settings()
        };
        let Err(CoreError::Validation(msg)) = s.validate() else {
            panic!("expected validation failure");
        };
        assert!(msg.contains("Please provide a valid email address."));
        assert!(msg.contains("The linkedin URL must be a valid URL (include http/https)."));
        assert!(!msg.contains("facebook"));
    }

    #[test]
    fn contact_link_rules() {
        assert!(validate_contact_link("Blog", "https://blog.example.com").is_ok());
        assert_matches!(
            validate_contact_link("B", ""),
            Err(CoreError::Validation(msg))
                if msg == "Label must be at least 2 characters. URL is required."
        );
        assert_matches!(
            validate_contact_link("Blog", "blog.example.com"),
            Err(CoreError::Validation(msg))
                if msg == "Please provide a valid URL (include http/https)."
        );
    }

    #[test]
    fn contact_link_rejects_script_urls() {
        assert_matches!(
            validate_contact_link("Click me", "javascript:alert(1)"),
            Err(CoreError::Validation(msg))
                if msg == "Please provide a valid URL (include http/https)."
        );
    }

    #[test]
    fn blank_icon_gets_default() {
        assert_eq!(link_icon_or_default("  "), DEFAULT_LINK_ICON);
        assert_eq!(link_icon_or_default(" fa-brands fa-x "), "fa-brands fa-x");
    }
}
