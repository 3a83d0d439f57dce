//! Shared helpers for index integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::path::Path;

use tempfile::TempDir;

/// A content directory populated from `(file name, contents)` pairs.
pub fn content_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        write(dir.path(), name, contents);
    }
    dir
}

/// Write one file below `root`, creating parent directories.
pub fn write(root: &Path, name: &str, contents: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// A post with a dated header and a category.
pub fn post(title: &str, date: &str, category: &str, body: &str) -> String {
    format!("---\ntitle: {title}\ndate: {date}\ncategory: {category}\n---\n\n{body}\n")
}
