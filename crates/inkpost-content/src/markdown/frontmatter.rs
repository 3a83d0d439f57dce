//! Front matter splitting and header field access.
//!
//! Front matter is a YAML block at the very start of a document, opened by
//! `---` and closed by the next `---`:
//!
//! ```markdown
//! ---
//! title: Spring Boot with Docker
//! date: 2025-01-15
//! category: SPRING
//! tags:
//!   - Java
//!   - Docker Compose
//! ---
//!
//! # Spring Boot with Docker
//!
//! The body starts here.
//! ```
//!
//! Splitting is total: anything that does not look like front matter is body.
//! Parsing the header into fields is a separate, fallible step.
//!
//! # Usage
//!
//! ```rust
//! use inkpost_content::markdown::frontmatter::{split_front_matter, FrontMatter};
//!
//! let raw = "---\ntitle: Hello\ntags: [a, b]\n---\n\nBody text";
//! let (header, body) = split_front_matter(raw);
//! assert_eq!(body, "Body text");
//!
//! let fields = FrontMatter::parse(header).unwrap();
//! assert_eq!(fields.get_str("title").as_deref(), Some("Hello"));
//! assert_eq!(fields.get_string_list("tags"), vec!["a", "b"]);
//! ```

use inkpost_core::{Error, Result};
use yaml_serde::{Mapping, Value};

/// Marker that opens and closes a front matter block.
pub const DELIMITER: &str = "---";

/// Split a raw document into `(header, body)`.
///
/// If `raw` starts with [`DELIMITER`], the next occurrence of the delimiter
/// after the opening one closes the header. The header is the text strictly
/// between the two markers and the body is everything after the closing
/// marker, both trimmed. Without an opening marker, or without a closing one,
/// the header is empty and the whole input (trimmed) is the body.
///
/// # Example
///
/// ```rust
/// use inkpost_content::markdown::frontmatter::split_front_matter;
///
/// assert_eq!(split_front_matter("---\na: 1\n---\nbody"), ("a: 1", "body"));
/// assert_eq!(split_front_matter("# No header\n"), ("", "# No header"));
/// assert_eq!(split_front_matter("---\nunterminated"), ("", "---\nunterminated"));
/// ```
pub fn split_front_matter(raw: &str) -> (&str, &str) {
    if let Some(rest) = raw.strip_prefix(DELIMITER)
        && let Some(end) = rest.find(DELIMITER)
    {
        let header = rest[..end].trim();
        let body = rest[end + DELIMITER.len()..].trim();
        return (header, body);
    }
    ("", raw.trim())
}

/// Parsed header fields.
///
/// A dynamically shaped key-value record read through accessors that fall
/// back to a default on absence or type mismatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: Mapping,
}

impl FrontMatter {
    /// Parse header text as a YAML mapping.
    ///
    /// Empty (or whitespace-only, or `null`) headers yield an empty record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the text is not valid YAML or its top level
    /// is not a mapping.
    pub fn parse(header: &str) -> Result<Self> {
        if header.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: Value = yaml_serde::from_str(header)
            .map_err(|e| Error::parse(format!("Invalid front matter YAML: {e}")))?;

        match value {
            Value::Mapping(fields) => Ok(Self { fields }),
            Value::Null => Ok(Self::default()),
            _ => Err(Error::parse("Front matter is not a key-value mapping")),
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw access to a field. `null` values read as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// Read a field as a string.
    ///
    /// Scalars (strings, numbers, booleans) are coerced to their string form.
    /// Missing fields, `null`, sequences, and mappings read as `None`.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_to_string)
    }

    /// Read the first present field among `keys` as a string.
    pub fn get_str_any(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.get_str(key))
    }

    /// Read a field as a list of strings.
    ///
    /// Returns an empty vec if the field is missing or not a sequence.
    /// Non-scalar items inside the sequence are dropped.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .and_then(|v| v.as_sequence())
            .map(|seq| seq.iter().filter_map(scalar_to_string).collect())
            .unwrap_or_default()
    }
}

/// String form of a YAML scalar.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ------------------------------------------------------------------------
    // split_front_matter tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_split_with_header() {
        let raw = "---\ntitle: Test\ncategory: SPRING\n---\n\n# Heading\n\nText\n";
        let (header, body) = split_front_matter(raw);
        assert_eq!(header, "title: Test\ncategory: SPRING");
        assert_eq!(body, "# Heading\n\nText");
    }

    #[test]
    fn test_split_without_header() {
        let raw = "\n# Just Markdown\n\nNo header here.\n";
        let (header, body) = split_front_matter(raw);
        assert_eq!(header, "");
        assert_eq!(body, "# Just Markdown\n\nNo header here.");
    }

    #[test]
    fn test_split_no_closing_marker() {
        let raw = "---\ntitle: Incomplete\n\nNo closing marker";
        let (header, body) = split_front_matter(raw);
        assert_eq!(header, "");
        assert_eq!(body, raw);
    }

    #[test]
    fn test_split_empty_header() {
        let (header, body) = split_front_matter("---\n---\nBody");
        assert_eq!(header, "");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_only_marker() {
        assert_eq!(split_front_matter("---"), ("", "---"));
    }

    #[test]
    fn test_split_leading_whitespace_is_not_header() {
        let raw = "  ---\ntitle: x\n---\nBody";
        let (header, body) = split_front_matter(raw);
        assert_eq!(header, "");
        assert_eq!(body, raw.trim());
    }

    #[test]
    fn test_split_closing_marker_is_first_occurrence() {
        let raw = "---\ntitle: a\n---\nBody with --- dashes\n---\nmore";
        let (header, body) = split_front_matter(raw);
        assert_eq!(header, "title: a");
        assert_eq!(body, "Body with --- dashes\n---\nmore");
    }

    #[test]
    fn test_split_empty_input() {
        assert_eq!(split_front_matter(""), ("", ""));
    }

    // ------------------------------------------------------------------------
    // FrontMatter tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_empty() {
        let fm = FrontMatter::parse("   ").unwrap();
        assert!(fm.is_empty());
        assert_eq!(fm.get_str("title"), None);
    }

    #[test]
    fn test_parse_null_document() {
        let fm = FrontMatter::parse("~").unwrap();
        assert!(fm.is_empty());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = FrontMatter::parse("{{invalid: yaml: here}}").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_parse_non_mapping() {
        assert!(FrontMatter::parse("- a\n- b").is_err());
        assert!(FrontMatter::parse("just a string").is_err());
    }

    #[test]
    fn test_get_str_coerces_scalars() {
        let fm = FrontMatter::parse("title: 2024\ndraft: true\nratio: 1.5").unwrap();
        assert_eq!(fm.get_str("title").as_deref(), Some("2024"));
        assert_eq!(fm.get_str("draft").as_deref(), Some("true"));
        assert_eq!(fm.get_str("ratio").as_deref(), Some("1.5"));
        assert_eq!(fm.len(), 3);
    }

    #[test]
    fn test_get_str_rejects_collections_and_null() {
        let fm = FrontMatter::parse("tags: [a]\nmeta:\n  k: v\nsummary:\n").unwrap();
        assert_eq!(fm.get_str("tags"), None);
        assert_eq!(fm.get_str("meta"), None);
        assert_eq!(fm.get_str("summary"), None);
        assert!(fm.get("summary").is_none());
    }

    #[test]
    fn test_get_str_any_prefers_first_key() {
        let fm = FrontMatter::parse("thumbnail: b.png\nthumbnailUrl: a.png").unwrap();
        assert_eq!(
            fm.get_str_any(&["thumbnailUrl", "thumbnail"]).as_deref(),
            Some("a.png")
        );
        let fm = FrontMatter::parse("thumbnail: b.png").unwrap();
        assert_eq!(
            fm.get_str_any(&["thumbnailUrl", "thumbnail"]).as_deref(),
            Some("b.png")
        );
    }

    #[test]
    fn test_get_string_list() {
        let fm = FrontMatter::parse("tags:\n  - Java\n  - Spring Boot\n  - 17").unwrap();
        assert_eq!(fm.get_string_list("tags"), vec!["Java", "Spring Boot", "17"]);
    }

    #[test]
    fn test_get_string_list_non_list() {
        let fm = FrontMatter::parse("tags: Java").unwrap();
        assert!(fm.get_string_list("tags").is_empty());
        assert!(fm.get_string_list("missing").is_empty());
    }

    #[test]
    fn test_unicode_fields() {
        let fm = FrontMatter::parse("title: 감자 연구소\ncategory: 일상").unwrap();
        assert_eq!(fm.get_str("title").as_deref(), Some("감자 연구소"));
        assert_eq!(fm.get_str("category").as_deref(), Some("일상"));
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    proptest! {
        #[test]
        fn prop_split_reconstructs_document(
            header in "[a-z]{1,8}: [a-z0-9 ]{0,20}",
            body in "[A-Za-z0-9 .#\n]{0,80}",
        ) {
            let raw = format!("{DELIMITER}\n{header}\n{DELIMITER}\n{body}");
            let (h, b) = split_front_matter(&raw);
            prop_assert_eq!(h, header.trim());
            prop_assert_eq!(b, body.trim());

            let rebuilt = format!("{DELIMITER}\n{h}\n{DELIMITER}\n{b}");
            let (h2, b2) = split_front_matter(&rebuilt);
            prop_assert_eq!(h2, h);
            prop_assert_eq!(b2, b);
        }

        #[test]
        fn prop_split_is_total(raw in "\\PC{0,120}") {
            let (header, body) = split_front_matter(&raw);
            prop_assert!(header.len() + body.len() <= raw.len());
        }
    }
}
