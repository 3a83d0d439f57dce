//! First-paragraph excerpts for teaser text.
//!
//! Excerpts are extracted line by line from the raw markdown rather than from
//! a parsed document. Leading structural lines (blank lines, headings, code
//! fences, rules, table rows) are skipped until the first line of prose; after
//! that, the next structural line ends the paragraph.
//!
//! # Example
//!
//! ```rust
//! use inkpost_content::markdown::excerpt::extract_first_paragraph;
//!
//! let body = "# Title\n\nThis is a **bold** intro with `code`.\n\nMore.";
//! assert_eq!(
//!     extract_first_paragraph(body, 200).as_deref(),
//!     Some("This is a bold intro with code.")
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Appended when an excerpt is cut at its length cap.
pub const ELLIPSIS: &str = "...";

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"));
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("Invalid italic regex"));
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(.+?)`").expect("Invalid inline code regex"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\]\(.+?\)").expect("Invalid link regex"));

/// Extract the first prose paragraph of `body`, capped at `max_chars`.
///
/// Lines are trimmed and joined with single spaces. Accumulation stops at the
/// first structural line after some text was gathered, or as soon as the
/// gathered text reaches `max_chars`. Emphasis, inline code, and link markup
/// are then stripped. A result longer than `max_chars` characters is cut to
/// `max_chars` and suffixed with [`ELLIPSIS`].
///
/// Returns `None` when nothing remains.
pub fn extract_first_paragraph(body: &str, max_chars: usize) -> Option<String> {
    let mut gathered = String::new();
    let mut gathered_chars = 0usize;

    for line in body.split('\n') {
        let trimmed = line.trim();
        if is_structural(trimmed) {
            if gathered_chars > 0 {
                break;
            }
            continue;
        }

        gathered.push_str(trimmed);
        gathered.push(' ');
        gathered_chars += trimmed.chars().count() + 1;

        if gathered_chars >= max_chars {
            break;
        }
    }

    let cleaned = strip_inline_markup(gathered.trim());
    let text = truncate_chars(&cleaned, max_chars);

    if text.is_empty() { None } else { Some(text) }
}

/// Strip bold, italic, inline code, and link markup, keeping the inner text.
///
/// # Example
///
/// ```rust
/// use inkpost_content::markdown::excerpt::strip_inline_markup;
///
/// assert_eq!(
///     strip_inline_markup("**Docker** and *Compose*, see [docs](https://docs.docker.com)"),
///     "Docker and Compose, see docs"
/// );
/// ```
pub fn strip_inline_markup(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, "$1");
    let text = ITALIC_RE.replace_all(&text, "$1");
    let text = CODE_RE.replace_all(&text, "$1");
    LINK_RE.replace_all(&text, "$1").into_owned()
}

/// Lines that never start a paragraph and end one once it has begun.
fn is_structural(trimmed: &str) -> bool {
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("```")
        || trimmed.starts_with("---")
        || trimmed.starts_with('|')
}

/// Cut to `max_chars` characters, appending the ellipsis if anything was cut.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &text[..byte_idx]),
        None => text.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
