//! Markdown to HTML rendering.
//!
//! Uses `pulldown-cmark` with CommonMark plus tables, strikethrough, and task
//! lists. Rendering is a pure function of the input and never fails; syntax it
//! does not recognise comes out as escaped text. Raw HTML in the source is
//! passed through untouched, so output must go through
//! [`crate::sanitize`] before it is embedded anywhere.

use pulldown_cmark::{html, Options, Parser};

/// Markdown extensions enabled on top of CommonMark.
pub fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render a markdown body to raw (unsanitized) HTML.
///
/// # Example
///
/// ```rust
/// use inkpost_content::markdown::render::render_markdown;
///
/// let html = render_markdown("# Title\n\nSome *text*.");
/// assert!(html.contains("<h1>Title</h1>"));
/// assert!(html.contains("<em>text</em>"));
/// ```
pub fn render_markdown(body: &str) -> String {
    let parser = Parser::new_ext(body, markdown_options());
    let mut output = String::with_capacity(body.len() + body.len() / 2);
    html::push_html(&mut output, parser);
    output
}
