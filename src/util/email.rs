//! Email address shape check for contact forms.
//!
//! Accepts exactly what the browser regex `^[^\s@]+@[^\s@]+\.[^\s@]+$`
//! accepts: one `@`, no whitespace anywhere, a non-empty local part, and a
//! domain with a dot that has text on both sides. "Whitespace" is the
//! ECMAScript `\s` class, which is not the same set as
//! [`char::is_whitespace`]: it includes U+FEFF and excludes U+0085.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_js_space) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let last = domain.len().saturating_sub(1);
    domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i < last)
}

/// Membership in the ECMAScript `\s` class.
fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
