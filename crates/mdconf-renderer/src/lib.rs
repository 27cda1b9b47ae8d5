//! Trait-based markdown renderer with pluggable backends.
//!
//! This crate provides a generic [`MarkdownRenderer`] that walks the
//! `pulldown-cmark` event stream and delegates format-specific elements to a
//! [`RenderBackend`].
//!
//! # Architecture
//!
//! - [`RenderBackend`]: one hook per customizable construct (headings, code
//!   blocks, images, blockquotes, breaks). Every hook has a conventional
//!   XHTML default, so a backend only overrides what differs.
//! - [`HtmlBackend`]: uses every default.
//! - [`RenderState`]: per-render accumulator (whether any heading was seen,
//!   which local files the output references). It is handed back inside
//!   [`RenderResult`] and reset on every call, so a renderer can be reused
//!   across documents.
//!
//! For Confluence storage format, use the `mdconf-confluence` crate.
//!
//! # Example
//!
//! ```
//! use mdconf_renderer::{HtmlBackend, MarkdownRenderer};
//!
//! let result = MarkdownRenderer::<HtmlBackend>::new().render_markdown("# Hello\n\n**Bold** text");
//! assert!(result.state.has_toc);
//! assert!(result.html.contains("<strong>Bold</strong>"));
//! ```

mod backend;
mod html;
mod renderer;
mod state;
mod util;

pub use backend::RenderBackend;
pub use html::HtmlBackend;
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::{RenderState, escape_html};
pub use util::fence_language;
