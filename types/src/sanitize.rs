//! Free-text sanitization for markup-interpreting surfaces.
//!
//! User-entered text (contact form fields) ends up in surfaces that interpret
//! markup: alert bodies rendered by the page shell, logged payloads replayed
//! into admin views. Any character with markup meaning must be converted to
//! its literal entity so the original text renders verbatim instead of being
//! interpreted.

use std::borrow::Cow;

/// Escape markup-significant characters in `input`.
///
/// Converts `&`, `<`, `>`, `"` and `'` to their entity forms. Total over all
/// inputs, including the empty string.
///
/// # Performance
///
/// Returns `Cow::Borrowed` when the input contains nothing to escape (the
/// common case for names and questions), avoiding allocation.
///
/// # Examples
///
/// ```
/// use vitrina_types::escape_markup;
///
/// assert_eq!(escape_markup("plain text"), "plain text");
/// assert_eq!(escape_markup("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_markup(input: &str) -> Cow<'_, str> {
    if !needs_escaping(input) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

fn needs_escaping(input: &str) -> bool {
    input.chars().any(|c| matches!(c, '&' | '<' | '>' | '"' | '\''))
}
