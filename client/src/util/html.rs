//! HTML text helpers for string-built fragments.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

/// Escape text for use in element content or a double-quoted attribute.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// CSS attribute selector `[attr="value"]` with `value` quoted for CSS.
#[must_use]
pub fn attr_selector(attr: &str, value: &str) -> String {
    let mut quoted = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    format!("[{attr}=\"{quoted}\"]")
}
