//! Page layout.
//!
//! Confluence shows pages as published by the service account, so every page
//! carries an "Authors" section. With a sidebar the page is split into two
//! columns:
//!
//! ```text
//! ------------------------------------------
//! |             |                          |
//! | ToC         |                          |
//! | Authors     |         Content          |
//! | (30% width) |      (800px width)       |
//! |             |                          |
//! ------------------------------------------
//! ```
//!
//! Without a sidebar the ToC comes first, then the content, then the authors.

use mdconf_renderer::{RenderState, escape_html};

/// Default width of the sidebar column.
pub const SIDEBAR_WIDTH: &str = "30%";
/// Default width of the content column.
pub const CONTENT_WIDTH: &str = "800px";

const TOC_TITLE: &str = "Table of Contents";
const AUTHORS_TITLE: &str = "Authors";

/// Layout settings for one page.
#[derive(Clone, Debug)]
pub struct Layout<'a> {
    sidebar: bool,
    authors: &'a [String],
    sidebar_width: &'a str,
    content_width: &'a str,
}

impl<'a> Layout<'a> {
    #[must_use]
    pub fn new(sidebar: bool, authors: &'a [String]) -> Self {
        Self {
            sidebar,
            authors,
            sidebar_width: SIDEBAR_WIDTH,
            content_width: CONTENT_WIDTH,
        }
    }

    /// Override the column widths (any CSS width Confluence accepts).
    #[must_use]
    pub fn widths(mut self, sidebar_width: &'a str, content_width: &'a str) -> Self {
        self.sidebar_width = sidebar_width;
        self.content_width = content_width;
        self
    }

    /// Assemble the final page around the rendered content.
    pub fn compose(&self, content: &str, state: &RenderState) -> String {
        let toc = toc_section(state.has_toc);
        let authors = authors_section(self.authors);

        if self.sidebar {
            let mut page = column(self.sidebar_width, &format!("{toc}{authors}"));
            page.push_str(&column(self.content_width, content));
            page
        } else {
            format!("{toc}{content}{authors}")
        }
    }
}

/// ToC heading and macro, empty when the page has no headings.
///
/// The macro excludes the layout's own headings from the outline.
fn toc_section(has_toc: bool) -> String {
    if !has_toc {
        return String::new();
    }
    format!(
        concat!(
            "<h1>{title}</h1>",
            r#"<p><ac:structured-macro ac:name="toc" ac:schema-version="1">"#,
            r#"<ac:parameter ac:name="exclude">^({authors}|{title})$</ac:parameter>"#,
            "</ac:structured-macro></p>"
        ),
        title = TOC_TITLE,
        authors = AUTHORS_TITLE,
    )
}

/// Authors heading with a profile picture and user link per author.
///
/// The heading is kept even when there are no authors.
fn authors_section(authors: &[String]) -> String {
    let entries: Vec<String> = authors.iter().map(|key| author_entry(key)).collect();
    format!("<h1>{AUTHORS_TITLE}</h1><p>{}</p>", entries.join("<br />"))
}

fn author_entry(user_key: &str) -> String {
    let user = format!(r#"<ri:user ri:userkey="{}" />"#, escape_html(user_key));
    format!(
        concat!(
            r#"<ac:structured-macro ac:name="profile-picture" ac:schema-version="1">"#,
            r#"<ac:parameter ac:name="User">{user}</ac:parameter>"#,
            "</ac:structured-macro>&nbsp;",
            "<ac:link>{user}</ac:link>"
        ),
        user = user
    )
}

fn column(width: &str, content: &str) -> String {
    format!(
        concat!(
            r#"<ac:structured-macro ac:name="column" ac:schema-version="1">"#,
            r#"<ac:parameter ac:name="width">{}</ac:parameter>"#,
            "<ac:rich-text-body>{}</ac:rich-text-body>",
            "</ac:structured-macro>"
        ),
        escape_html(width),
        content
    )
}
