//! The content index: load once, query many times.
//!
//! # Consistency
//!
//! Queries read the currently published [`IndexSnapshot`] without locking.
//! [`ContentIndex::load`] builds a complete new snapshot off to the side and
//! publishes it with a single atomic pointer swap, so a reader sees either the
//! old index or the new one, never a mix. Loads themselves are serialized.
//!
//! Rendering happens per detail request, on the snapshot the request started
//! with; bulk loading only derives metadata.

use std::sync::Arc;

use arc_swap::ArcSwap;
use inkpost_content::{render_markdown, ArticleMeta, HtmlSanitizer};
use inkpost_core::Result;
use tokio::sync::Mutex;

use crate::fingerprint::fingerprint;
use crate::snapshot::{FacetCount, IndexSnapshot, LoadStats};
use crate::source::{ContentSource, SourceEntry};

/// An article's metadata paired with its sanitized HTML.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedArticle {
    /// Article metadata.
    pub meta: Arc<ArticleMeta>,
    /// Rendered and sanitized body.
    pub html: String,
}

/// A detail view plus related articles from the same category.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleView {
    /// The requested article.
    pub article: RenderedArticle,
    /// Other articles in its category, newest first.
    pub related: Vec<Arc<ArticleMeta>>,
}

/// In-memory article index over a [`ContentSource`].
pub struct ContentIndex {
    source: Box<dyn ContentSource>,
    sanitizer: HtmlSanitizer,
    snapshot: ArcSwap<IndexSnapshot>,
    reload_lock: Mutex<()>,
}

impl ContentIndex {
    /// Create an empty index over `source`. Call [`load`](Self::load) to fill it.
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            sanitizer: HtmlSanitizer::new(),
            snapshot: ArcSwap::from_pointee(IndexSnapshot::default()),
            reload_lock: Mutex::new(()),
        }
    }

    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    /// Enumerate the source, rebuild every view, and publish the result.
    ///
    /// Items that fail to read or parse are skipped and counted in the
    /// returned [`LoadStats`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the source as a whole cannot be enumerated
    /// (e.g. the content directory is missing). The published snapshot is then
    /// left exactly as it was.
    pub async fn load(&self) -> Result<LoadStats> {
        let _guard = self.reload_lock.lock().await;
        let entries = self.source.entries().await?;
        let fingerprint = fingerprint(&entries);
        Ok(self.publish(entries, fingerprint))
    }

    /// Rebuild only if the source contents changed since the last load.
    ///
    /// Returns `Ok(None)` when the published snapshot is already current.
    pub async fn reload_if_changed(&self) -> Result<Option<LoadStats>> {
        let _guard = self.reload_lock.lock().await;
        let entries = self.source.entries().await?;
        let fingerprint = fingerprint(&entries);

        if self.snapshot.load().fingerprint() == Some(fingerprint.as_str()) {
            log::debug!("Content unchanged in {}, keeping index", self.source.describe());
            return Ok(None);
        }
        Ok(Some(self.publish(entries, fingerprint)))
    }

    fn publish(&self, entries: Vec<SourceEntry>, fingerprint: String) -> LoadStats {
        let (snapshot, stats) = IndexSnapshot::build(entries, fingerprint);
        self.snapshot.store(Arc::new(snapshot));

        log::info!(
            "Loaded {} articles from {} at {} ({} skipped, {} duplicates)",
            stats.items_loaded,
            self.source.describe(),
            stats.loaded_at.to_rfc3339(),
            stats.items_skipped,
            stats.duplicates
        );
        stats
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// The currently published snapshot.
    ///
    /// Hold on to it to run several queries against one consistent state.
    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        self.snapshot.load_full()
    }

    /// Number of indexed articles.
    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    /// Whether the index holds no articles.
    pub fn is_empty(&self) -> bool {
        self.snapshot.load().is_empty()
    }

    /// All articles, newest first, undated last.
    pub fn list_all(&self) -> Vec<Arc<ArticleMeta>> {
        self.snapshot.load().articles().to_vec()
    }

    /// Articles whose category matches case-insensitively, in index order.
    pub fn list_by_category(&self, category: &str) -> Vec<Arc<ArticleMeta>> {
        self.snapshot.load().by_category(category)
    }

    /// Articles carrying `tag` (case-insensitive), in index order.
    pub fn list_by_tag(&self, tag: &str) -> Vec<Arc<ArticleMeta>> {
        self.snapshot.load().by_tag(tag)
    }

    /// Render one article. `None` if the slug is unknown.
    pub fn get_detail(&self, slug: &str) -> Option<RenderedArticle> {
        let snapshot = self.snapshot.load();
        self.render(&snapshot, slug)
    }

    /// Up to `limit` articles sharing `category`, excluding `exclude_slug`.
    ///
    /// A `None` category yields an empty list.
    pub fn get_related(
        &self,
        category: Option<&str>,
        exclude_slug: &str,
        limit: usize,
    ) -> Vec<Arc<ArticleMeta>> {
        self.snapshot.load().related(category, exclude_slug, limit)
    }

    /// Render one article together with up to `limit` related articles.
    pub fn get_detail_with_related(&self, slug: &str, limit: usize) -> Option<ArticleView> {
        let snapshot = self.snapshot.load();
        let article = self.render(&snapshot, slug)?;
        let related = snapshot.related(article.meta.category.as_deref(), slug, limit);
        Some(ArticleView { article, related })
    }

    /// Distinct categories with article counts, most used first.
    pub fn categories(&self) -> Vec<FacetCount> {
        self.snapshot.load().categories()
    }

    /// Distinct tags with article counts, most used first.
    pub fn tags(&self) -> Vec<FacetCount> {
        self.snapshot.load().tags()
    }

    fn render(&self, snapshot: &IndexSnapshot, slug: &str) -> Option<RenderedArticle> {
        let meta = snapshot.get(slug)?;
        let body = snapshot.body(slug)?;
        let html = self.sanitizer.sanitize(&render_markdown(body));
        Some(RenderedArticle {
            meta: Arc::clone(meta),
            html,
        })
    }
}

impl std::fmt::Debug for ContentIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot.load();
        f.debug_struct("ContentIndex")
            .field("source", &self.source.describe())
            .field("articles", &snapshot.len())
            .field("loaded_at", &snapshot.loaded_at())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
