//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Renders text with newlines as HTML line breaks.
///
/// The input is HTML-escaped first, so the result is safe to mark `|safe`
/// in templates. Model responses are plain text with meaningful line
/// structure; this keeps that structure without trusting the content.
///
/// Usage in templates: `{{ design.outfit|linebreaksbr|safe }}`
#[askama::filter_fn]
pub fn linebreaksbr(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(escape_with_breaks(&value.to_string()))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// HTML-escape text and turn newlines into `<br>` tags.
fn escape_with_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("<br>\n"),
            '\r' => {}
            other => out.push(other),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_with_breaks_converts_newlines() {
        let out = escape_with_breaks("line one\nline two");
        assert_eq!(out, "line one<br>\nline two");
    }

    #[test]
    fn test_escape_with_breaks_escapes_html() {
        let out = escape_with_breaks("<script>alert('x')</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_with_breaks_drops_carriage_returns() {
        let out = escape_with_breaks("a\r\nb");
        assert_eq!(out, "a<br>\nb");
    }
}
