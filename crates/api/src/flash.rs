//! One-shot flash messages carried between a form POST and the next page GET.

use std::collections::BTreeMap;

/// Which admin area a flash belongs to. A page shows only its own scopes but
/// consumes whatever flash is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashScope {
    Services,
    Portfolio,
    Settings,
    ContactLinks,
    Users,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

/// A message plus, on validation failure, the submitted form values so the
/// form can be re-filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub scope: FlashScope,
    pub level: FlashLevel,
    pub message: String,
    pub form: BTreeMap<String, String>,
}

impl Flash {
    pub fn success(scope: FlashScope, message: impl Into<String>) -> Self {
        Self {
            scope,
            level: FlashLevel::Success,
            message: message.into(),
            form: BTreeMap::new(),
        }
    }

    pub fn error(scope: FlashScope, message: impl Into<String>) -> Self {
        Self {
            scope,
            level: FlashLevel::Error,
            message: message.into(),
            form: BTreeMap::new(),
        }
    }

    /// Attach submitted form values to echo back into the form.
    pub fn with_form<'a>(mut self, fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        self.form.extend(
            fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == FlashLevel::Error
    }

    /// The echoed value for `field`, if this flash carries one.
    pub fn form_value(&self, field: &str) -> Option<&str> {
        self.form.get(field).map(String::as_str)
    }

    pub fn has_form(&self) -> bool {
        !self.form.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_flash_echoes_form_values() {
        let flash = Flash::error(FlashScope::Services, "Bad input.")
            .with_form([("name", "A"), ("description", "short")]);

        assert!(flash.is_error());
        assert!(flash.has_form());
        assert_eq!(flash.form_value("name"), Some("A"));
        assert_eq!(flash.form_value("missing"), None);
    }

    #[test]
    fn success_flash_has_no_form() {
        let flash = Flash::success(FlashScope::Users, "Created.");
        assert!(!flash.is_error());
        assert!(!flash.has_form());
    }
}
