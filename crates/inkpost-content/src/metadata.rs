//! Article metadata and its derivation from header fields and body text.
//!
//! Header fields win; missing fields are filled by fallback rules:
//!
//! | Field | Source |
//! |-------|--------|
//! | `title` | `title`, else the slug |
//! | `date` | `date` as `YYYY-MM-DD` (or a YAML timestamp), else absent |
//! | `tags` | `tags` as a list, else empty |
//! | `category` | `category`, else absent |
//! | `thumbnail` | `thumbnailUrl` or `thumbnail`, else absent |
//! | `description` | `description`, else `summary`, else first paragraph (200 chars) |
//! | `summary` | `summary`, else first paragraph (300 chars) |

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use yaml_serde::Value;

use crate::markdown::excerpt::extract_first_paragraph;
use crate::markdown::frontmatter::FrontMatter;

/// Character cap for a derived description.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Character cap for a derived summary.
pub const SUMMARY_MAX_CHARS: usize = 300;

/// Header keys read for the thumbnail, in priority order.
pub const THUMBNAIL_KEYS: &[&str] = &["thumbnailUrl", "thumbnail"];

/// Metadata for one article, as held by the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMeta {
    /// Unique identifier, also the URL segment.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Publication date; undated articles sort last.
    pub date: Option<NaiveDate>,
    /// Tags in header order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Single category.
    pub category: Option<String>,
    /// Longer teaser.
    pub summary: Option<String>,
    /// Short teaser.
    pub description: Option<String>,
    /// Opaque thumbnail path or URL.
    pub thumbnail: Option<String>,
}

impl ArticleMeta {
    /// Minimal metadata: slug as title, nothing else.
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            title: slug.clone(),
            slug,
            date: None,
            tags: Vec::new(),
            category: None,
            summary: None,
            description: None,
            thumbnail: None,
        }
    }

    /// Case-insensitive category match. Uncategorized articles match nothing.
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|own| eq_ignore_case(own, category))
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|own| eq_ignore_case(own, tag))
    }
}

impl fmt::Display for ArticleMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.slug)?;
        if let Some(date) = self.date {
            write!(f, " {date}")?;
        }
        if let Some(category) = &self.category {
            write!(f, " [{category}]")?;
        }
        Ok(())
    }
}

/// Unicode-aware case-insensitive equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Build complete metadata from parsed header fields and the markdown body.
///
/// Never fails: malformed values degrade to their defaults, and an
/// unparseable date is logged and left absent.
///
/// # Example
///
/// ```rust
/// use inkpost_content::markdown::frontmatter::FrontMatter;
/// use inkpost_content::metadata::build_metadata;
///
/// let fields = FrontMatter::parse("category: SPRING\ndate: 2025-01-15").unwrap();
/// let meta = build_metadata("spring-docker", &fields, "# Title\n\nFirst real paragraph text.");
///
/// assert_eq!(meta.title, "spring-docker");
/// assert_eq!(meta.date.unwrap().to_string(), "2025-01-15");
/// assert_eq!(meta.description.as_deref(), Some("First real paragraph text."));
/// assert_eq!(meta.summary.as_deref(), Some("First real paragraph text."));
/// ```
pub fn build_metadata(slug: &str, fields: &FrontMatter, body: &str) -> ArticleMeta {
    let title = fields.get_str("title").unwrap_or_else(|| slug.to_string());
    let date = parse_date(slug, fields.get("date"));
    let tags = fields.get_string_list("tags");
    let category = fields.get_str("category");
    let summary = fields.get_str("summary");
    let description = fields.get_str("description");
    let thumbnail = fields.get_str_any(THUMBNAIL_KEYS);

    let description = description
        .or_else(|| summary.clone())
        .or_else(|| extract_first_paragraph(body, DESCRIPTION_MAX_CHARS));
    let summary = summary.or_else(|| extract_first_paragraph(body, SUMMARY_MAX_CHARS));

    ArticleMeta {
        slug: slug.to_string(),
        title,
        date,
        tags,
        category,
        summary,
        description,
        thumbnail,
    }
}

/// Read a header date value.
///
/// Accepts `YYYY-MM-DD` strings and timestamp strings (RFC 3339, or
/// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS`), keeping the calendar date.
/// Anything else yields `None`; unparseable strings are logged.
pub fn parse_date(slug: &str, value: Option<&Value>) -> Option<NaiveDate> {
    let text = match value? {
        Value::String(s) => s.trim(),
        other => {
            log::warn!("Invalid date in '{slug}': expected a date string, got {other:?}");
            return None;
        }
    };

    let parsed = parse_date_str(text);
    if parsed.is_none() {
        log::warn!("Invalid date format in '{slug}': {text}");
    }
    parsed
}

fn parse_date_str(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|datetime| datetime.date())
}

// ============================================================================
// Tests
// ============================================================================
