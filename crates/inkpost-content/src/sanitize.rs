//! Allow-list HTML sanitizing.
//!
//! Rendered markdown may carry raw HTML from the source, so everything is
//! filtered through an explicit policy before it is embedded in a page:
//!
//! | Allowed | |
//! |---------|--|
//! | Elements | `h1`–`h6`, `p`, `br`, `hr`, `ul`, `ol`, `li`, `a`, `img`, `code`, `pre`, `blockquote`, `strong`, `em`, `b`, `i`, `del`, `s`, `table`, `thead`, `tbody`, `tfoot`, `tr`, `th`, `td`, `div`, `span`, `dl`, `dt`, `dd`, `sup`, `sub`, `input` |
//! | Global attributes | `class`, `id` |
//! | `a` | `href`, `target`, `rel` |
//! | `img` | `src`, `alt`, `width`, `height`, `loading` |
//! | `input` | `type`, `checked`, `disabled` |
//! | `td`, `th` | `align`, `colspan`, `rowspan` |
//! | URL schemes | `https`, `http`, `mailto` (relative URLs pass) |
//!
//! Disallowed elements are unwrapped (their text kept), except `script` and
//! `style` whose content is dropped entirely. Disallowed attributes, including
//! every `on*` handler and `style`, are removed. The policy never fails.
//!
//! Unwrapping can leave markup the HTML parser repairs differently on the
//! next read (e.g. `<p>` nested in `<p>` after an unwrapped `<select>`), so
//! output is cleaned again until it stops changing.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use ammonia::Builder;

/// Elements kept in sanitized output.
pub const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "ul", "ol", "li", "a", "img", "code",
    "pre", "blockquote", "strong", "em", "b", "i", "del", "s", "table", "thead", "tbody",
    "tfoot", "tr", "th", "td", "div", "span", "dl", "dt", "dd", "sup", "sub", "input",
];

/// Attributes allowed on every kept element.
pub const GLOBAL_ATTRIBUTES: &[&str] = &["class", "id"];

/// Per-element attribute allow-list.
pub const TAG_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "target", "rel"]),
    ("img", &["src", "alt", "width", "height", "loading"]),
    ("input", &["type", "checked", "disabled"]),
    ("td", &["align", "colspan", "rowspan"]),
    ("th", &["align", "colspan", "rowspan"]),
];

/// URL schemes allowed on URL-bearing attributes.
pub const URL_SCHEMES: &[&str] = &["https", "http", "mailto"];

/// Elements removed together with everything inside them.
pub const DROPPED_WITH_CONTENT: &[&str] = &["script", "style"];

/// Upper bound on cleaning passes per call.
const MAX_PASSES: usize = 4;

static DEFAULT_SANITIZER: LazyLock<HtmlSanitizer> = LazyLock::new(HtmlSanitizer::new);

/// HTML sanitizer holding the compiled allow-list policy.
///
/// Build once and share; sanitizing takes `&self` and is safe to call from
/// many threads at once.
pub struct HtmlSanitizer {
    policy: Builder<'static>,
}

impl HtmlSanitizer {
    /// Create a sanitizer with the article allow-list.
    pub fn new() -> Self {
        let tag_attributes: HashMap<&'static str, HashSet<&'static str>> = TAG_ATTRIBUTES
            .iter()
            .map(|(tag, attrs)| (*tag, attrs.iter().copied().collect()))
            .collect();

        let mut policy = Builder::default();
        policy
            .tags(ALLOWED_TAGS.iter().copied().collect())
            .clean_content_tags(DROPPED_WITH_CONTENT.iter().copied().collect())
            .generic_attributes(GLOBAL_ATTRIBUTES.iter().copied().collect())
            .tag_attributes(tag_attributes)
            .url_schemes(URL_SCHEMES.iter().copied().collect())
            // `rel` is author-controlled on the allow-list, so don't inject one.
            .link_rel(None)
            .strip_comments(true);

        Self { policy }
    }

    /// Filter `html` through the policy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use inkpost_content::sanitize::HtmlSanitizer;
    ///
    /// let sanitizer = HtmlSanitizer::new();
    /// assert_eq!(sanitizer.sanitize("<p>ok</p><script>alert(1)</script>"), "<p>ok</p>");
    /// ```
    pub fn sanitize(&self, html: &str) -> String {
        let mut out = self.policy.clean(html).to_string();
        for _ in 1..MAX_PASSES {
            let next = self.policy.clean(&out).to_string();
            if next == out {
                break;
            }
            out = next;
        }
        out
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HtmlSanitizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlSanitizer")
            .field("tags", &ALLOWED_TAGS.len())
            .field("url_schemes", &URL_SCHEMES)
            .finish()
    }
}

/// Sanitize with a shared default [`HtmlSanitizer`].
pub fn sanitize_html(html: &str) -> String {
    DEFAULT_SANITIZER.sanitize(html)
}

// ============================================================================
// Tests
// ============================================================================
