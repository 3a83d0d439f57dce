//! In-memory article index for Inkpost.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     inkpost-index                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  ContentSource trait                                     │
//! │  ├── DirectorySource (markdown files on disk)            │
//! │  └── MemorySource (in-memory documents)                  │
//! ├──────────────────────────────────────────────────────────┤
//! │  ContentIndex (load / reload, query API)                 │
//! │  └── ArcSwap<IndexSnapshot> (atomic publish)             │
//! ├──────────────────────────────────────────────────────────┤
//! │  IndexSnapshot (sorted list, slug maps, facets)          │
//! │  fingerprint (reload-if-changed)                         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use inkpost_index::{ContentIndex, MemorySource};
//!
//! # tokio_test::block_on(async {
//! let source = MemorySource::new()
//!     .with_document("a.md", "---\ndate: 2025-01-20\ncategory: X\n---\nA")
//!     .with_document("b.md", "---\ndate: 2025-01-15\ncategory: X\n---\nB");
//!
//! let index = ContentIndex::new(source);
//! index.load().await.unwrap();
//!
//! let slugs: Vec<_> = index.list_all().iter().map(|m| m.slug.clone()).collect();
//! assert_eq!(slugs, ["a", "b"]);
//!
//! let related = index.get_related(Some("x"), "a", 3);
//! assert_eq!(related[0].slug, "b");
//!
//! assert!(index.get_detail("missing").is_none());
//! # });
//! ```

pub mod fingerprint;
pub mod index;
pub mod snapshot;
pub mod source;

pub use fingerprint::fingerprint;
pub use index::{ArticleView, ContentIndex, RenderedArticle};
pub use snapshot::{FacetCount, IndexSnapshot, LoadStats};
pub use source::{ContentSource, DirectorySource, MemorySource, SourceEntry};
