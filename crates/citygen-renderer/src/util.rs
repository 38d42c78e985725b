//! Shared text helpers for page rendering.

/// Maximum length of a page title and its `<h1>`, in characters.
pub const TITLE_MAX_CHARS: usize = 70;

/// Maximum length of a meta description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 155;

/// Truncate `text` to at most `max_chars` characters.
///
/// Text within the limit is returned unchanged. Longer text keeps its first
/// `max_chars - 1` characters, drops trailing whitespace and gains a `…`.
/// The cut may land mid-word.
///
/// # Examples
///
/// ```
/// use citygen_renderer::clamp;
///
/// assert_eq!(clamp("short", 70), "short");
/// assert_eq!(clamp("Wasp Nest Removal", 10), "Wasp Nest…");
/// ```
pub fn clamp(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    if max_chars == 0 {
        return String::new();
    }
    let head: String = text.chars().take(max_chars - 1).collect();
    let mut clamped = head.trim_end().to_owned();
    clamped.push('…');
    clamped
}

/// Escape HTML special characters.
///
/// Safe for both element content and double- or single-quoted attribute
/// values. The output is also valid XML character data.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
