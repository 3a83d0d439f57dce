//! Content processing for Inkpost articles.
//!
//! This crate turns one raw markdown document into the pieces the index
//! needs, with no I/O and no shared state:
//!
//! ```text
//! raw text ──split──▶ header + body
//!   header ──parse──▶ FrontMatter ──build (with body)──▶ ArticleMeta
//!     body ──render──▶ raw HTML ──sanitize──▶ safe HTML
//! ```
//!
//! # Modules
//!
//! - [`markdown`]: Front matter splitting, excerpts, rendering
//! - [`metadata`]: [`ArticleMeta`] and its fallback rules
//! - [`sanitize`]: Allow-list HTML sanitizer
//! - [`document`]: Split + parse + build in one call
//!
//! # Example
//!
//! ```rust
//! use inkpost_content::{parse_article, render_safe_html};
//!
//! let raw = "---\ntitle: Hello\ncategory: notes\n---\n\nSee <b onclick=\"x()\">this</b>.";
//! let article = parse_article("hello", raw).unwrap();
//! assert_eq!(article.meta.category.as_deref(), Some("notes"));
//!
//! let html = render_safe_html(&article.body);
//! assert!(html.contains("<p>See <b>this</b>.</p>"));
//! assert!(!html.contains("onclick"));
//! ```

pub mod document;
pub mod markdown;
pub mod metadata;
pub mod sanitize;

pub use document::{parse_article, ParsedArticle};
pub use markdown::{extract_first_paragraph, render_markdown, split_front_matter, FrontMatter};
pub use metadata::{build_metadata, eq_ignore_case, ArticleMeta};
pub use sanitize::{sanitize_html, HtmlSanitizer};

/// Render a markdown body and sanitize the result with the default policy.
pub fn render_safe_html(body: &str) -> String {
    sanitize_html(&render_markdown(body))
}
