//! Backend trait for format-specific rendering.

use std::fmt::Write;

use crate::state::{RenderState, escape_html};

/// Format-specific rendering hooks.
///
/// The generic renderer handles paragraphs, lists, tables, links and inline
/// formatting itself and calls into the backend for everything below. All
/// hooks write into `out` and default to plain XHTML.
pub trait RenderBackend {
    /// Render a completed heading. `html` is the already rendered inline content.
    fn heading(level: u8, html: &str, out: &mut String) {
        write!(out, "<h{level}>{html}</h{level}>").unwrap();
    }

    /// Render a code block. `content` is the raw, unescaped source.
    fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
        match lang {
            Some(lang) => write!(
                out,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(lang),
                escape_html(content)
            )
            .unwrap(),
            None => write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap(),
        }
    }

    /// Render an image.
    ///
    /// Backends that reference local files record them in
    /// [`RenderState::attachments`].
    fn image(src: &str, alt: &str, title: &str, _state: &mut RenderState, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            out,
            r#"<img src="{}"{title_attr} alt="{}" />"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
    }

    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    fn hard_break(out: &mut String) {
        out.push_str("<br />");
    }

    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr />");
    }

    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked="checked" disabled="disabled" /> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled="disabled" /> "#);
        }
    }
}
