//! Front matter splitting.
//!
//! The metadata block is implicitly open from the first line. A delimiter
//! line closes it once the buffer holds some non-blank content. A delimiter
//! seen before any content is the optional opening marker: the first one is
//! dropped, a second one closes an empty block.

/// Line that closes (and optionally opens) the front matter block.
pub const DELIMITER: &str = "---";

/// A document split into its raw front matter and Markdown body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitDocument {
    /// Metadata lines, verbatim, without the delimiter lines.
    pub front_matter: String,
    /// Everything after the closing delimiter, trimmed.
    pub body: String,
}

/// Split raw document text into front matter and body.
///
/// When no closing delimiter is found the whole input is front matter and
/// the body is empty.
pub fn split_front_matter(text: &str) -> SplitDocument {
    let mut front_matter = String::new();
    let mut body = String::new();
    let mut in_front_matter = true;
    let mut opened = false;

    for line in text.split_inclusive('\n') {
        if !in_front_matter {
            body.push_str(line);
            continue;
        }

        if line.trim() == DELIMITER {
            if has_content(&front_matter) || opened {
                in_front_matter = false;
            } else {
                opened = true;
            }
            continue;
        }

        front_matter.push_str(line);
    }

    SplitDocument {
        front_matter,
        body: body.trim().to_owned(),
    }
}

fn has_content(buffer: &str) -> bool {
    !buffer.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_opening_and_closing_delimiters() {
        let doc = split_front_matter("---\nsidebar: true\nauthor_keys: [a1]\n---\n# Title\n\nHello\n");
        assert_eq!(doc.front_matter, "sidebar: true\nauthor_keys: [a1]\n");
        assert_eq!(doc.body, "# Title\n\nHello");
    }

    #[test]
    fn test_split_without_opening_delimiter() {
        let doc = split_front_matter("sidebar: true\n---\nBody text");
        assert_eq!(doc.front_matter, "sidebar: true\n");
        assert_eq!(doc.body, "Body text");
    }

    #[test]
    fn test_split_no_delimiter_everything_is_front_matter() {
        let text = "# Just markdown\n\nNo metadata here.\n";
        let doc = split_front_matter(text);
        assert_eq!(doc.front_matter, text);
        assert!(doc.body.is_empty());
    }

    #[test]
    fn test_split_only_opening_delimiter() {
        let doc = split_front_matter("---\ntitle: x\n");
        assert_eq!(doc.front_matter, "title: x\n");
        assert!(doc.body.is_empty());
    }

    #[test]
    fn test_split_empty_block() {
        let doc = split_front_matter("---\n---\n# Title");
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, "# Title");
    }

    #[test]
    fn test_split_body_keeps_later_delimiters() {
        let doc = split_front_matter("---\na: 1\n---\nIntro\n\n---\n\nMore");
        assert_eq!(doc.front_matter, "a: 1\n");
        assert_eq!(doc.body, "Intro\n\n---\n\nMore");
    }

    #[test]
    fn test_split_leading_blank_lines_before_opener() {
        let doc = split_front_matter("\n---\na: 1\n---\nBody");
        assert_eq!(doc.front_matter, "\na: 1\n");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_split_delimiter_with_surrounding_whitespace() {
        let doc = split_front_matter("---  \na: 1\n  ---\nBody");
        assert_eq!(doc.front_matter, "a: 1\n");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_split_crlf_line_endings() {
        let doc = split_front_matter("---\r\na: 1\r\n---\r\nBody\r\n");
        assert_eq!(doc.front_matter, "a: 1\r\n");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_split_body_is_trimmed() {
        let doc = split_front_matter("a: 1\n---\n\n\n  Body  \n\n");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_split_empty_input() {
        assert_eq!(split_front_matter(""), SplitDocument::default());
    }
}
