//! Markdown to Confluence storage format conversion.
//!
//! This crate turns a Markdown document with optional YAML front matter into
//! Confluence XHTML storage format plus the list of local images that must be
//! uploaded as page attachments.
//!
//! - [`PageRenderer`]: configurable conversion entry point
//! - [`ConfluenceBackend`]: [`mdconf_renderer::RenderBackend`] emitting
//!   Confluence macros for code blocks and images
//! - [`Layout`]: table of contents, authors and optional sidebar columns
//! - [`image`]: image source classification and size hints
//!
//! # Front matter
//!
//! | Key | Type | Effect |
//! |-----|------|--------|
//! | `author_keys` | list of user keys | Authors section entries |
//! | `sidebar` | bool | Two-column layout with ToC and authors on the left |
//!
//! # Example
//!
//! ```
//! let page = mdconf_confluence::convert(
//!     "---\nauthor_keys: [jdoe]\n---\n# Intro\n\n![chart|300](img/chart.png)",
//! );
//! assert!(page.html.contains(r#"ac:name="toc""#));
//! assert_eq!(page.attachments, vec!["img/chart.png".to_owned()]);
//! ```

mod backend;
pub mod image;
mod layout;
mod page;

pub use backend::ConfluenceBackend;
pub use layout::{CONTENT_WIDTH, Layout, SIDEBAR_WIDTH};
pub use page::{ConvertedPage, PageRenderer, convert};
