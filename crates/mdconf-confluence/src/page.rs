//! Markdown to Confluence page conversion.
//!
//! [`PageRenderer`] renders a Markdown body with [`ConfluenceBackend`] and
//! wraps it in the page [`Layout`] configured by the document's front matter.

use mdconf_meta::{FrontMatter, parse_document};
use mdconf_renderer::{MarkdownRenderer, RenderResult};

use crate::backend::ConfluenceBackend;
use crate::layout::{CONTENT_WIDTH, Layout, SIDEBAR_WIDTH};

/// A converted page ready for publishing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertedPage {
    /// Confluence storage format markup.
    pub html: String,
    /// Local image paths to upload as page attachments, in encounter order.
    pub attachments: Vec<String>,
}

/// Renders Markdown documents to Confluence storage format pages.
#[derive(Clone, Debug)]
pub struct PageRenderer {
    gfm: bool,
    sidebar_width: String,
    content_width: String,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer {
    /// Create a new renderer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gfm: true,
            sidebar_width: SIDEBAR_WIDTH.to_owned(),
            content_width: CONTENT_WIDTH.to_owned(),
        }
    }

    /// Enable or disable GitHub Flavored Markdown extensions.
    #[must_use]
    pub fn gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Set the width of the sidebar column (default `30%`).
    #[must_use]
    pub fn sidebar_width(mut self, width: impl Into<String>) -> Self {
        self.sidebar_width = width.into();
        self
    }

    /// Set the width of the content column (default `800px`).
    #[must_use]
    pub fn content_width(mut self, width: impl Into<String>) -> Self {
        self.content_width = width.into();
        self
    }

    /// Convert a whole document: front matter block followed by Markdown.
    ///
    /// Missing or malformed front matter falls back to the defaults.
    pub fn convert(&self, text: &str) -> ConvertedPage {
        let (front_matter, body) = parse_document(text);
        self.render(&body, &front_matter)
    }

    /// Render a Markdown body using already parsed front matter.
    pub fn render(&self, markdown: &str, front_matter: &FrontMatter) -> ConvertedPage {
        let RenderResult { html, state } = MarkdownRenderer::<ConfluenceBackend>::new()
            .with_gfm(self.gfm)
            .render_markdown(markdown);

        let html = Layout::new(front_matter.sidebar, &front_matter.author_keys)
            .widths(&self.sidebar_width, &self.content_width)
            .compose(&html, &state);

        tracing::debug!(
            sidebar = front_matter.sidebar,
            has_toc = state.has_toc,
            authors = front_matter.author_keys.len(),
            attachments = state.attachments.len(),
            "Rendered Confluence page"
        );

        ConvertedPage {
            html,
            attachments: state.attachments,
        }
    }
}

/// Convert a document with the default [`PageRenderer`].
pub fn convert(text: &str) -> ConvertedPage {
    PageRenderer::new().convert(text)
}
