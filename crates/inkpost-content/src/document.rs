//! One-shot parsing of a raw content item into metadata plus body.

use inkpost_core::Result;

use crate::markdown::frontmatter::{split_front_matter, FrontMatter};
use crate::metadata::{build_metadata, ArticleMeta};

/// A content item after splitting and metadata derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArticle {
    /// Derived metadata.
    pub meta: ArticleMeta,
    /// Markdown body with the header removed, trimmed.
    pub body: String,
}

/// Split `raw`, parse its header, and build metadata for `slug`.
///
/// # Errors
///
/// Returns [`inkpost_core::Error::Parse`] if the header is present but is not
/// a valid YAML mapping. Callers loading many items skip such items.
///
/// # Example
///
/// ```rust
/// use inkpost_content::parse_article;
///
/// let raw = "---\ntitle: Hello\ntags: [rust]\n---\n\nFirst paragraph.";
/// let article = parse_article("hello", raw).unwrap();
/// assert_eq!(article.meta.title, "Hello");
/// assert_eq!(article.meta.tags, vec!["rust"]);
/// assert_eq!(article.body, "First paragraph.");
/// ```
pub fn parse_article(slug: &str, raw: &str) -> Result<ParsedArticle> {
    let (header, body) = split_front_matter(raw);
    let fields = FrontMatter::parse(header)?;
    let meta = build_metadata(slug, &fields, body);
    Ok(ParsedArticle {
        meta,
        body: body.to_string(),
    })
}
