/// Escapes localized text so it is inert as element content.
///
/// Quotes are escaped as well, so the result is also safe inside a quoted
/// attribute value.
pub fn escape_html_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Replaces `\r\n` and `\n` line endings with `<br />`.
pub fn newlines_to_br(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                out.push_str("<br />");
            }
            '\n' => out.push_str("<br />"),
            _ => out.push(ch),
        }
    }
    out
}
