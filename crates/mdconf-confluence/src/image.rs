//! Image reference resolution.
//!
//! Confluence distinguishes images hosted elsewhere (`<ri:url>`) from files
//! attached to the page (`<ri:attachment>`). Local images are referenced by
//! file name only, so the original path is handed back for upload.
//!
//! Display size comes from a hint at the end of the alt text:
//! `![caption|300](a.png)` sets the height, `![caption|200x400](a.png)` sets
//! height and width. A hint may also trail the source (`![a](a.png|300)`);
//! the alt text hint wins when both are present.

use std::fmt::Write;

use mdconf_renderer::escape_html;
use url::Url;

/// Height and width parsed from a size hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeHint {
    pub height: Option<u32>,
    pub width: Option<u32>,
}

impl SizeHint {
    /// Parse the segment after the last `|` as `H` or `HxW`.
    ///
    /// Returns `None` when no dimension is present or any present dimension
    /// is not a positive integer.
    pub fn parse(text: &str) -> Option<Self> {
        let segment = text.rsplit('|').next().unwrap_or(text);
        let (height, width) = segment.split_once('x').unwrap_or((segment, ""));

        let hint = Self {
            height: parse_dimension(height).ok()?,
            width: parse_dimension(width).ok()?,
        };
        (hint != Self::default()).then_some(hint)
    }
}

/// `Ok(None)` for an absent dimension, `Err` for an invalid one.
fn parse_dimension(text: &str) -> Result<Option<u32>, ()> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<u32>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(()),
    }
}

/// An image rendered as a Confluence `<ac:image>` tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedImage {
    /// The `<ac:image>` markup.
    pub tag: String,
    /// Source path to upload, for local images.
    pub attachment: Option<String>,
}

/// Resolve an image source and alt text into Confluence markup.
pub fn resolve(src: &str, alt: &str) -> ResolvedImage {
    let (src, source_hint) = split_source_hint(src);
    let hint = SizeHint::parse(alt).or(source_hint).unwrap_or_default();

    let mut tag = String::from("<ac:image");
    if let Some(height) = hint.height {
        write!(tag, r#" ac:height="{height}""#).unwrap();
    }
    if let Some(width) = hint.width {
        write!(tag, r#" ac:width="{width}""#).unwrap();
    }
    tag.push('>');

    let attachment = if is_external(src) {
        write!(tag, r#"<ri:url ri:value="{}" />"#, escape_html(src)).unwrap();
        None
    } else {
        write!(
            tag,
            r#"<ri:attachment ri:filename="{}" />"#,
            escape_html(basename(src))
        )
        .unwrap();
        Some(src.to_owned())
    };
    tag.push_str("</ac:image>");

    ResolvedImage { tag, attachment }
}

/// Whether `src` names a network location.
///
/// Protocol-relative sources (`//cdn.example.com/a.png`) count as external.
pub fn is_external(src: &str) -> bool {
    let parsed = match Url::parse(src) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) if src.starts_with("//") => {
            Url::parse(&format!("http:{src}")).ok()
        }
        Err(_) => None,
    };
    parsed.is_some_and(|url| url.host_str().is_some_and(|host| !host.is_empty()))
}

/// Strip a trailing `|H` or `|HxW` size hint from an image source.
fn split_source_hint(src: &str) -> (&str, Option<SizeHint>) {
    if let Some((path, hint)) = src.rsplit_once('|')
        && let Some(hint) = SizeHint::parse(hint)
    {
        return (path, Some(hint));
    }
    (src, None)
}

/// Final path segment.
fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hint(height: Option<u32>, width: Option<u32>) -> Option<SizeHint> {
        Some(SizeHint { height, width })
    }

    #[test]
    fn test_size_hint_height_only() {
        assert_eq!(SizeHint::parse("caption|300"), hint(Some(300), None));
    }

    #[test]
    fn test_size_hint_height_and_width() {
        assert_eq!(SizeHint::parse("caption|200x400"), hint(Some(200), Some(400)));
    }

    #[test]
    fn test_size_hint_invalid_discards_both() {
        assert_eq!(SizeHint::parse("caption|abc"), None);
        assert_eq!(SizeHint::parse("caption|200xabc"), None);
        assert_eq!(SizeHint::parse("caption|abcx400"), None);
        assert_eq!(SizeHint::parse("caption|1x2x3"), None);
    }

    #[test]
    fn test_size_hint_without_separator_uses_whole_text() {
        assert_eq!(SizeHint::parse("250"), hint(Some(250), None));
        assert_eq!(SizeHint::parse("A diagram"), None);
    }

    #[test]
    fn test_size_hint_uses_last_separator() {
        assert_eq!(SizeHint::parse("a|b|120x80"), hint(Some(120), Some(80)));
    }

    #[test]
    fn test_size_hint_width_only() {
        assert_eq!(SizeHint::parse("caption|x400"), hint(None, Some(400)));
    }

    #[test]
    fn test_size_hint_empty_components() {
        assert_eq!(SizeHint::parse(""), None);
        assert_eq!(SizeHint::parse("caption|"), None);
        assert_eq!(SizeHint::parse("caption|x"), None);
        assert_eq!(SizeHint::parse("caption|300x"), hint(Some(300), None));
    }

    #[test]
    fn test_size_hint_rejects_zero_and_negative() {
        assert_eq!(SizeHint::parse("caption|0"), None);
        assert_eq!(SizeHint::parse("caption|-5"), None);
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://example.com/pic.png"));
        assert!(is_external("http://localhost:8080/pic.png"));
        assert!(is_external("//cdn.example.com/pic.png"));
        assert!(!is_external("images/pic.png"));
        assert!(!is_external("/static/pic.png"));
        assert!(!is_external("pic.png"));
        assert!(!is_external("file:///tmp/pic.png"));
    }

    #[test]
    fn test_resolve_external() {
        let image = resolve("https://example.com/pic.png", "caption");
        assert_eq!(
            image.tag,
            r#"<ac:image><ri:url ri:value="https://example.com/pic.png" /></ac:image>"#
        );
        assert_eq!(image.attachment, None);
    }

    #[test]
    fn test_resolve_local_uses_basename() {
        let image = resolve("images/pic.png", "caption|200x400");
        assert_eq!(
            image.tag,
            r#"<ac:image ac:height="200" ac:width="400"><ri:attachment ri:filename="pic.png" /></ac:image>"#
        );
        assert_eq!(image.attachment, Some("images/pic.png".to_owned()));
    }

    #[test]
    fn test_resolve_external_with_height() {
        let image = resolve("https://example.com/a.png?x=1&y=2", "caption|300");
        assert_eq!(
            image.tag,
            r#"<ac:image ac:height="300"><ri:url ri:value="https://example.com/a.png?x=1&amp;y=2" /></ac:image>"#
        );
    }

    #[test]
    fn test_resolve_source_hint() {
        let image = resolve("local.png|100", "img");
        assert_eq!(
            image.tag,
            r#"<ac:image ac:height="100"><ri:attachment ri:filename="local.png" /></ac:image>"#
        );
        assert_eq!(image.attachment, Some("local.png".to_owned()));
    }

    #[test]
    fn test_resolve_alt_hint_wins_over_source_hint() {
        let image = resolve("local.png|100", "img|50x60");
        assert!(image.tag.starts_with(r#"<ac:image ac:height="50" ac:width="60">"#));
    }

    #[test]
    fn test_resolve_source_pipe_without_hint_is_kept() {
        let image = resolve("odd|name.png", "");
        assert_eq!(image.attachment, Some("odd|name.png".to_owned()));
        assert!(image.tag.contains(r#"ri:filename="odd|name.png""#));
    }
}
