//! Escaping for user-supplied values interpolated into the outgoing mail.
//!
//! The HTML body escapes entities so submitted markup renders as text;
//! the plain-text alternative strips anything tag-shaped instead.

use std::sync::OnceLock;

use regex::Regex;

static MARKUP: OnceLock<Regex> = OnceLock::new();

/// HTML-escape `value` for interpolation into element content.
pub fn escape_html(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

/// HTML-escape `value` for interpolation into a double-quoted attribute.
pub fn escape_html_attribute(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

/// HTML-escape `value` and turn its line breaks into `<br>` tags.
/// Escaping happens first so the inserted tags survive it.
pub fn escape_html_multiline(value: &str) -> String {
    escape_html(value)
        .replace("\r\n", "\n")
        .replace('\n', "<br>\n")
}

/// Remove anything tag-shaped from `value`.
///
/// Used for the plain-text mail body, where escaped entities would be
/// noise; the tags are dropped and their inner text kept.
pub fn strip_markup(value: &str) -> String {
    let re = MARKUP.get_or_init(|| Regex::new(r"<[^>]*>").expect("markup pattern is valid"));
    re.replace_all(value, "").into_owned()
}
