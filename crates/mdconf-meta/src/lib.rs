//! Front matter handling for mdconf documents.
//!
//! A document is an optional YAML metadata block followed by a Markdown body:
//!
//! ```text
//! ---
//! sidebar: true
//! author_keys: [jdoe]
//! ---
//! # Title
//! ```
//!
//! [`split_front_matter`] separates the two parts without interpreting the
//! metadata, and [`FrontMatter`] gives typed access to the keys the page
//! renderer consumes.
//!
//! # Example
//!
//! ```
//! use mdconf_meta::parse_document;
//!
//! let (front_matter, body) = parse_document("---\nsidebar: true\n---\n# Hello\n");
//! assert!(front_matter.sidebar);
//! assert_eq!(body, "# Hello");
//! ```

mod front_matter;
mod split;

pub use front_matter::{FrontMatter, FrontMatterError};
pub use split::{DELIMITER, SplitDocument, split_front_matter};

/// Split a document and parse its front matter.
///
/// Malformed metadata is logged and replaced by [`FrontMatter::default`],
/// so this never fails.
pub fn parse_document(text: &str) -> (FrontMatter, String) {
    let SplitDocument { front_matter, body } = split_front_matter(text);
    (FrontMatter::parse_lenient(&front_matter), body)
}
