//! Content sources.
//!
//! A [`ContentSource`] enumerates named raw documents. The index only needs a
//! name (for the slug) and the text; where the text lives is up to the source.
//!
//! - [`DirectorySource`]: files on disk, filtered by extension
//! - [`MemorySource`]: documents held in memory (embedding, tests)

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use async_walkdir::WalkDir;
use futures::StreamExt;
use inkpost_core::{ContentConfig, Error, Result};

/// One raw document as enumerated by a source.
#[derive(Debug)]
pub struct SourceEntry {
    /// Source name; the slug is this name without its extension.
    pub name: String,
    /// Where the entry came from, for log messages.
    pub location: String,
    /// Document text, or the error that prevented reading it.
    pub content: Result<String>,
}

impl SourceEntry {
    /// An entry whose text was read successfully.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            location: name.clone(),
            name,
            content: Ok(content.into()),
        }
    }
}

/// Something that can enumerate raw documents.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Enumerate all documents in a deterministic order.
    ///
    /// Unreadable individual documents are returned as entries carrying an
    /// error, so the caller can skip them. `Err` means the source as a whole
    /// is unreachable.
    async fn entries(&self) -> Result<Vec<SourceEntry>>;

    /// Short human-readable description for log messages.
    fn describe(&self) -> String;
}

// ============================================================================
// DirectorySource
// ============================================================================

/// Markdown files in a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extensions: HashSet<String>,
    recursive: bool,
}

impl DirectorySource {
    /// Read `*.md` files directly inside `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: HashSet::from(["md".to_string()]),
            recursive: false,
        }
    }

    /// Build from the `[content]` config section.
    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(&config.dir)
            .with_extensions(config.extensions.iter().map(String::as_str))
            .recursive(config.recursive)
    }

    /// Replace the accepted extensions (without dots, case-insensitive).
    pub fn with_extensions<'a>(mut self, extensions: impl IntoIterator<Item = &'a str>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    /// Descend into subdirectories.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// The directory being read.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| self.extensions.contains(&ext.to_string_lossy().to_lowercase()))
            .unwrap_or(false)
    }

    async fn discover(&self) -> Result<Vec<PathBuf>> {
        let mut files = if self.recursive {
            walk_files(&self.root).await
        } else {
            list_files(&self.root).await?
        };
        files.retain(|path| self.accepts(path));

        // Sort for deterministic ordering
        files.sort();
        Ok(files)
    }
}

#[async_trait]
impl ContentSource for DirectorySource {
    async fn entries(&self) -> Result<Vec<SourceEntry>> {
        let is_dir = tokio::fs::metadata(&self.root)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(Error::not_found(
                self.root.to_string_lossy(),
                "content directory",
            ));
        }

        let files = self.discover().await?;
        let mut entries = Vec::with_capacity(files.len());

        for path in files {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                log::warn!("Skipping non-UTF-8 file name: {:?}", path);
                continue;
            };

            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| Error::io_with_path(e, &path));

            entries.push(SourceEntry {
                name: name.to_string(),
                location: path.display().to_string(),
                content,
            });
        }

        Ok(entries)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

/// Whether `path` is a regular file, following symlinks.
async fn is_regular_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Regular files directly inside `root`.
async fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dir = tokio::fs::read_dir(root)
        .await
        .map_err(|e| Error::io_with_path(e, root))?;

    let mut files = Vec::new();
    while let Some(entry) = dir
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, root))?
    {
        let path = entry.path();
        if is_regular_file(&path).await {
            files.push(path);
        }
    }
    Ok(files)
}

/// Regular files anywhere under `root`. Walk errors are logged and skipped.
async fn walk_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut walker = WalkDir::new(root);

    while let Some(entry) = walker.next().await {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Walk error: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if is_regular_file(&path).await {
            files.push(path);
        }
    }
    files
}

// ============================================================================
// MemorySource
// ============================================================================

/// Documents held in memory, enumerated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<(String, String)>,
}

impl MemorySource {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document under `name` (e.g. `"hello.md"`).
    pub fn with_document(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.documents.push((name.into(), content.into()));
        self
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn entries(&self) -> Result<Vec<SourceEntry>> {
        Ok(self
            .documents
            .iter()
            .map(|(name, content)| SourceEntry::new(name.clone(), content.clone()))
            .collect())
    }

    fn describe(&self) -> String {
        format!("memory ({} documents)", self.documents.len())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, name: &str, content: &[u8]) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        let mut file = std::fs::File::create(path).unwrap();
        file.write_all(content).unwrap();
    }

    fn names(entries: &[SourceEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    // ------------------------------------------------------------------------
    // DirectorySource tests
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_directory_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        create_test_file(temp.path(), "b.md", b"B");
        create_test_file(temp.path(), "a.md", b"A");
        create_test_file(temp.path(), "notes.txt", b"T");
        create_test_file(temp.path(), "nested/c.md", b"C");

        let entries = DirectorySource::new(temp.path()).entries().await.unwrap();
        assert_eq!(names(&entries), vec!["a.md", "b.md"]);
        assert_eq!(entries[0].content.as_deref().unwrap(), "A");
    }

    #[tokio::test]
    async fn test_directory_recursive() {
        let temp = TempDir::new().unwrap();
        create_test_file(temp.path(), "a.md", b"A");
        create_test_file(temp.path(), "nested/c.md", b"C");

        let entries = DirectorySource::new(temp.path())
            .recursive(true)
            .entries()
            .await
            .unwrap();
        assert_eq!(names(&entries), vec!["a.md", "c.md"]);
    }

    #[tokio::test]
    async fn test_directory_extensions_case_insensitive() {
        let temp = TempDir::new().unwrap();
        create_test_file(temp.path(), "upper.MD", b"U");
        create_test_file(temp.path(), "other.markdown", b"M");

        let entries = DirectorySource::new(temp.path())
            .with_extensions([".md", "Markdown"])
            .entries()
            .await
            .unwrap();
        assert_eq!(names(&entries), vec!["other.markdown", "upper.MD"]);
    }

    #[tokio::test]
    async fn test_directory_invalid_utf8_is_entry_error() {
        let temp = TempDir::new().unwrap();
        create_test_file(temp.path(), "bad.md", &[0xff, 0xfe, 0x00]);
        create_test_file(temp.path(), "good.md", b"ok");

        let entries = DirectorySource::new(temp.path()).entries().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].content.is_err());
        assert!(entries[1].content.is_ok());
        assert!(entries[0].location.ends_with("bad.md"));
    }

    #[tokio::test]
    async fn test_directory_missing_root() {
        let result = DirectorySource::new("/nonexistent/inkpost/posts")
            .entries()
            .await;
        let err = result.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_directory_named_like_post_is_skipped() {
        let temp = TempDir::new().unwrap();
        create_test_file(temp.path(), "a.md", b"A");
        std::fs::create_dir(temp.path().join("drafts.md")).unwrap();
        create_test_file(temp.path(), "drafts.md/inner.txt", b"I");

        let flat = DirectorySource::new(temp.path()).entries().await.unwrap();
        assert_eq!(names(&flat), vec!["a.md"]);

        let deep = DirectorySource::new(temp.path())
            .recursive(true)
            .entries()
            .await
            .unwrap();
        assert_eq!(names(&deep), vec!["a.md"]);
    }

    #[tokio::test]
    async fn test_directory_root_is_a_file() {
        let temp = TempDir::new().unwrap();
        create_test_file(temp.path(), "posts.md", b"not a directory");

        let err = DirectorySource::new(temp.path().join("posts.md"))
            .entries()
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_config() {
        let config = ContentConfig {
            dir: PathBuf::from("/srv/posts"),
            extensions: vec!["md".into(), "MARKDOWN".into()],
            recursive: true,
        };
        let source = DirectorySource::from_config(&config);
        assert_eq!(source.root(), Path::new("/srv/posts"));
        assert!(source.accepts(Path::new("x.markdown")));
        assert!(!source.accepts(Path::new("x.txt")));
        assert!(source.recursive);
        assert_eq!(source.describe(), "directory /srv/posts");
    }

    // ------------------------------------------------------------------------
    // MemorySource tests
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_memory_source_keeps_order() {
        let source = MemorySource::new()
            .with_document("z.md", "Z")
            .with_document("a.md", "A");
        let entries = source.entries().await.unwrap();
        assert_eq!(names(&entries), vec!["z.md", "a.md"]);
        assert_eq!(source.describe(), "memory (2 documents)");
    }
}
