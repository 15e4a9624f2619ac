//! Server-rendered HTML.
//!
//! Pages are plain strings assembled from small helpers. Every value that
//! came from a user or the database goes through [`escape`].

pub mod admin;
pub mod public;

use axum::http::StatusCode;
use folio_core::types::Timestamp;

use crate::flash::{Flash, FlashLevel};

pub const SITE_TITLE: &str = "Folio";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

pub(crate) fn format_timestamp(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Wrap `body` in the shared document shell.
pub(crate) fn document(title: &str, body_class: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/static/css/style.css\">\n\
         </head>\n<body class=\"{body_class}\">\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

/// Banner for a pending flash message, or nothing.
pub(crate) fn flash_banner(flash: Option<&Flash>) -> String {
    let Some(flash) = flash else {
        return String::new();
    };
    let class = match flash.level {
        FlashLevel::Success => "flash flash-success",
        FlashLevel::Error => "flash flash-error",
    };
    format!(
        "<div class=\"{class}\" role=\"alert\">{}</div>",
        escape(&flash.message)
    )
}

/// `<input>` element with an escaped value.
pub(crate) fn text_input(name: &str, label: &str, kind: &str, value: &str) -> String {
    format!(
        "<label>{label}<input type=\"{kind}\" name=\"{name}\" value=\"{value}\"></label>",
        label = escape(label),
        value = escape(value),
    )
}

pub(crate) fn text_area(name: &str, label: &str, value: &str) -> String {
    format!(
        "<label>{label}<textarea name=\"{name}\" rows=\"4\">{value}</textarea></label>",
        label = escape(label),
        value = escape(value),
    )
}

/// Minimal page for error responses.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = status.canonical_reason().unwrap_or("Error");
    document(
        heading,
        "error",
        &format!(
            "<main class=\"error-page\"><h1>{code} {heading}</h1><p>{message}</p>\
             <p><a href=\"/\">Back to the home page</a></p></main>",
            code = status.as_u16(),
            heading = escape(heading),
            message = escape(message),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flash::FlashScope;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn flash_banner_escapes_message() {
        let flash = Flash::error(FlashScope::Services, "<b>bad</b>");
        let html = flash_banner(Some(&flash));
        assert!(html.contains("flash-error"));
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
        assert!(flash_banner(None).is_empty());
    }

    #[test]
    fn error_page_shows_status() {
        let html = error_page(StatusCode::NOT_FOUND, "Nothing here");
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("Nothing here"));
    }
}
