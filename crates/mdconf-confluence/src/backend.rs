//! Confluence XHTML storage format backend.

use std::fmt::Write;

use mdconf_renderer::{RenderBackend, RenderState, escape_html};

use crate::image;

/// Confluence storage format backend.
///
/// Overrides code blocks (code macro), images (`<ac:image>` with local files
/// recorded as attachments) and task list markers. Everything else uses the
/// XHTML defaults.
pub struct ConfluenceBackend;

impl RenderBackend for ConfluenceBackend {
    fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
        write!(
            out,
            concat!(
                r#"<ac:structured-macro ac:name="code" ac:schema-version="1">"#,
                r#"<ac:parameter ac:name="language">{}</ac:parameter>"#,
                "<ac:plain-text-body>{}</ac:plain-text-body>",
                "</ac:structured-macro>"
            ),
            escape_html(lang.unwrap_or_default()),
            cdata(content.trim_end_matches(['\n', '\r']))
        )
        .unwrap();
    }

    fn image(src: &str, alt: &str, _title: &str, state: &mut RenderState, out: &mut String) {
        let resolved = image::resolve(src, alt);
        if let Some(path) = resolved.attachment {
            state.attachments.push(path);
        }
        out.push_str(&resolved.tag);
    }

    fn task_list_marker(checked: bool, out: &mut String) {
        out.push_str(if checked { "[x] " } else { "[ ] " });
    }
}

/// Wrap text in a CDATA section.
///
/// A literal `]]>` is split across two sections so it survives intact.
fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}
