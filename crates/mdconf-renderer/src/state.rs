//! Render state tracking.

use pulldown_cmark::Alignment;

/// Side effects accumulated while rendering one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderState {
    /// At least one heading was rendered.
    pub has_toc: bool,
    /// Local files referenced by the output, in encounter order, duplicates kept.
    pub attachments: Vec<String>,
}

/// Escape text for use in XHTML content and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Code block being collected.
#[derive(Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    lang: Option<String>,
    buffer: String,
}

impl CodeBlockState {
    pub(crate) fn start(&mut self, lang: Option<String>) {
        self.active = true;
        self.lang = lang;
        self.buffer.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.lang.take(), std::mem::take(&mut self.buffer))
    }
}

/// Alt text being collected for an image.
#[derive(Default)]
pub(crate) struct ImageState {
    depth: usize,
    alt: String,
}

impl ImageState {
    /// Images nested in alt text only contribute their own alt text.
    pub(crate) fn start(&mut self) {
        if self.depth == 0 {
            self.alt.clear();
        }
        self.depth += 1;
    }

    pub(crate) fn is_active(&self) -> bool {
        self.depth > 0
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.alt.push_str(text);
    }

    /// Returns the alt text once the outermost image closes.
    pub(crate) fn end(&mut self) -> Option<String> {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            Some(std::mem::take(&mut self.alt))
        } else {
            None
        }
    }
}

/// Heading being collected.
#[derive(Default)]
pub(crate) struct HeadingState {
    level: Option<u8>,
    html: String,
}

impl HeadingState {
    pub(crate) fn start(&mut self, level: u8) {
        self.level = Some(level);
        self.html.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.level.is_some()
    }

    pub(crate) fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    pub(crate) fn end(&mut self) -> Option<(u8, String)> {
        self.level
            .take()
            .map(|level| (level, std::mem::take(&mut self.html)))
    }
}

/// Table being rendered.
#[derive(Default)]
pub(crate) struct TableState {
    alignments: Vec<Alignment>,
    in_head: bool,
    cell: usize,
}

impl TableState {
    pub(crate) fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell = 0;
    }

    pub(crate) fn start_head(&mut self) {
        self.in_head = true;
        self.cell = 0;
    }

    pub(crate) fn end_head(&mut self) {
        self.in_head = false;
    }

    pub(crate) fn start_row(&mut self) {
        self.cell = 0;
    }

    pub(crate) fn next_cell(&mut self) {
        self.cell += 1;
    }

    pub(crate) fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Style attribute for the current cell, empty when unaligned.
    pub(crate) fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell) {
            Some(Alignment::Left) => r#" style="text-align: left""#,
            Some(Alignment::Center) => r#" style="text-align: center""#,
            Some(Alignment::Right) => r#" style="text-align: right""#,
            Some(Alignment::None) | None => "",
        }
    }
}
