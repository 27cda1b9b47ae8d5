//! HTML backend for markdown rendering.

use crate::backend::RenderBackend;

/// HTML render backend.
///
/// Uses the default for every hook:
/// - `<pre><code>` for code blocks
/// - `<blockquote>` for blockquotes
/// - `<img>` for images, which are never recorded as attachments
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {}
