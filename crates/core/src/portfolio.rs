//! Rules for portfolio items.

use crate::error::CoreError;
use crate::validation::{has_min_chars, is_image_reference, Violations};

pub const MIN_TITLE_CHARS: usize = 3;
pub const MIN_DESCRIPTION_CHARS: usize = 10;

pub fn validate_portfolio_item(
    title: &str,
    description: &str,
    image: &str,
) -> Result<(), CoreError> {
    let mut violations = Violations::new();
    violations.check(
        has_min_chars(title, MIN_TITLE_CHARS),
        "Title must be at least 3 characters.",
    );
    violations.check(
        has_min_chars(description, MIN_DESCRIPTION_CHARS),
        "Description must be at least 10 characters.",
    );
    violations.check(
        is_image_reference(image),
        "Image URL must be a valid path (starting with /) or full URL \
         (starting with http:// or https://).",
    );
    violations.into_result()
}
