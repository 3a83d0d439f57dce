//! Slug derivation.
//!
//! A slug is the source name without its file extension. It is used verbatim
//! as the primary key and URL segment, so no case folding or separator
//! rewriting happens here.

/// Derive a slug from a source name by dropping its final extension.
///
/// Names without an extension are returned unchanged. Leading-dot names
/// (`.draft`) are treated as having no extension.
///
/// # Examples
///
/// ```
/// use inkpost_core::util::ids::slug_from_name;
///
/// assert_eq!(slug_from_name("spring-docker-setup.md"), "spring-docker-setup");
/// assert_eq!(slug_from_name("notes.v2.md"), "notes.v2");
/// assert_eq!(slug_from_name("README"), "README");
/// ```
pub fn slug_from_name(name: &str) -> String {
    match name.rfind('.') {
        Some(0) | None => name.to_string(),
        Some(pos) => name[..pos].to_string(),
    }
}
