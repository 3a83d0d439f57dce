//! Markdown front matter, excerpts, and rendering.
//!
//! - [`frontmatter`]: Header/body splitting and header field accessors
//! - [`excerpt`]: First-paragraph extraction for teasers
//! - [`render`]: Markdown to (unsanitized) HTML

pub mod excerpt;
pub mod frontmatter;
pub mod render;

// Re-export key types and functions
pub use excerpt::{extract_first_paragraph, strip_inline_markup, ELLIPSIS};
pub use frontmatter::{split_front_matter, FrontMatter, DELIMITER};
pub use render::{markdown_options, render_markdown};
