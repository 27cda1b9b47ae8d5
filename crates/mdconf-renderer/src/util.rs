//! Shared utility functions for markdown rendering.

use pulldown_cmark::HeadingLevel;

/// Extract the language from a fenced code block info string.
///
/// The language is the first whitespace-separated word; attributes after it
/// are ignored.
///
/// # Examples
///
/// ```
/// use mdconf_renderer::fence_language;
///
/// assert_eq!(fence_language("rust"), Some("rust"));
/// assert_eq!(fence_language("python title=example.py"), Some("python"));
/// assert_eq!(fence_language("   "), None);
/// ```
pub fn fence_language(info: &str) -> Option<&str> {
    info.split_whitespace().next()
}

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
