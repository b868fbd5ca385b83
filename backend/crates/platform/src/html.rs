//! HTML escaping
//!
//! Untrusted text interpolated into HTML email bodies must pass through
//! [`escape_html`] first.

/// Escape the five HTML-significant characters.
///
/// Safe for both element content and double- or single-quoted attribute
/// values. Newlines are preserved as-is.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
