/// Domain errors raised by the rules in this crate.
///
/// Both variants carry a sentence meant for the person filling in the form.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The value collides with an existing record, e.g. a taken username.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    /// The user-facing sentence without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation(msg) | CoreError::Conflict(msg) => msg,
        }
    }
}
