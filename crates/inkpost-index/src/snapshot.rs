//! Immutable index snapshots.
//!
//! A snapshot holds three views over the same set of articles:
//!
//! - the full list, sorted newest first (undated last, stable on ties)
//! - slug → metadata
//! - slug → markdown body, kept for rendering on demand
//!
//! Snapshots are built in one pass from source entries and never mutated
//! afterwards; reloading builds a new one.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use inkpost_content::{parse_article, ArticleMeta};
use inkpost_core::slug_from_name;
use serde::Serialize;

use crate::source::SourceEntry;

/// Statistics about one load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Entries the source enumerated.
    pub items_seen: usize,
    /// Entries indexed.
    pub items_loaded: usize,
    /// Entries skipped because they could not be read or parsed.
    pub items_skipped: usize,
    /// Entries skipped because an earlier entry had the same slug.
    pub duplicates: usize,
    /// Fingerprint of the source contents.
    pub fingerprint: String,
    /// When the snapshot was built.
    pub loaded_at: DateTime<Utc>,
}

/// A distinct category or tag with the number of articles carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount {
    /// Spelling as first seen in index order.
    pub name: String,
    /// Number of articles.
    pub count: usize,
}

/// One published state of the index.
#[derive(Debug, Default)]
pub struct IndexSnapshot {
    articles: Vec<Arc<ArticleMeta>>,
    by_slug: HashMap<String, Arc<ArticleMeta>>,
    bodies: HashMap<String, Arc<str>>,
    fingerprint: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
}

impl IndexSnapshot {
    /// Build a snapshot from enumerated source entries.
    ///
    /// Entries that cannot be read or parsed are skipped with a warning, as
    /// are entries whose slug was already taken by an earlier entry.
    pub fn build(entries: Vec<SourceEntry>, fingerprint: String) -> (Self, LoadStats) {
        let loaded_at = Utc::now();
        let mut stats = LoadStats {
            items_seen: entries.len(),
            fingerprint: fingerprint.clone(),
            loaded_at,
            ..Default::default()
        };

        let mut articles = Vec::with_capacity(entries.len());
        let mut by_slug = HashMap::with_capacity(entries.len());
        let mut bodies = HashMap::with_capacity(entries.len());

        for entry in entries {
            let raw = match entry.content {
                Ok(raw) => raw,
                Err(e) => {
                    log::warn!("Failed to read {}: {}", entry.location, e);
                    stats.items_skipped += 1;
                    continue;
                }
            };

            let slug = slug_from_name(&entry.name);
            if by_slug.contains_key(&slug) {
                log::warn!(
                    "Duplicate slug '{}' from {}, keeping the first",
                    slug,
                    entry.location
                );
                stats.duplicates += 1;
                continue;
            }

            let article = match parse_article(&slug, &raw) {
                Ok(a) => a,
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", entry.location, e);
                    stats.items_skipped += 1;
                    continue;
                }
            };

            let meta = Arc::new(article.meta);
            articles.push(Arc::clone(&meta));
            by_slug.insert(slug.clone(), meta);
            bodies.insert(slug.clone(), Arc::from(article.body));
            stats.items_loaded += 1;

            log::debug!("Loaded article: {slug}");
        }

        articles.sort_by(|a, b| newest_first(a, b));

        let snapshot = Self {
            articles,
            by_slug,
            bodies,
            fingerprint: Some(fingerprint),
            loaded_at: Some(loaded_at),
        };
        (snapshot, stats)
    }

    /// All articles in index order.
    pub fn articles(&self) -> &[Arc<ArticleMeta>] {
        &self.articles
    }

    /// Number of articles.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the snapshot holds no articles.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Fingerprint of the source contents this snapshot was built from.
    /// `None` for the initial empty snapshot.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// When this snapshot was built. `None` for the initial empty snapshot.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Metadata by slug (exact match).
    pub fn get(&self, slug: &str) -> Option<&Arc<ArticleMeta>> {
        self.by_slug.get(slug)
    }

    /// Markdown body by slug (exact match).
    pub fn body(&self, slug: &str) -> Option<&Arc<str>> {
        self.bodies.get(slug)
    }

    /// Articles in `category` (case-insensitive), in index order.
    pub fn by_category(&self, category: &str) -> Vec<Arc<ArticleMeta>> {
        self.filtered(|meta| meta.in_category(category))
    }

    /// Articles tagged `tag` (case-insensitive), in index order.
    pub fn by_tag(&self, tag: &str) -> Vec<Arc<ArticleMeta>> {
        self.filtered(|meta| meta.has_tag(tag))
    }

    /// Up to `limit` articles in `category`, excluding `exclude_slug`.
    ///
    /// A `None` category matches nothing.
    pub fn related(
        &self,
        category: Option<&str>,
        exclude_slug: &str,
        limit: usize,
    ) -> Vec<Arc<ArticleMeta>> {
        let Some(category) = category else {
            return Vec::new();
        };
        self.articles
            .iter()
            .filter(|meta| meta.in_category(category) && meta.slug != exclude_slug)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Distinct categories with article counts.
    pub fn categories(&self) -> Vec<FacetCount> {
        count_facets(
            self.articles
                .iter()
                .map(|meta| meta.category.iter().map(String::as_str).collect()),
        )
    }

    /// Distinct tags with article counts.
    pub fn tags(&self) -> Vec<FacetCount> {
        count_facets(
            self.articles
                .iter()
                .map(|meta| meta.tags.iter().map(String::as_str).collect()),
        )
    }

    fn filtered(&self, predicate: impl Fn(&ArticleMeta) -> bool) -> Vec<Arc<ArticleMeta>> {
        self.articles
            .iter()
            .filter(|meta| predicate(meta))
            .cloned()
            .collect()
    }
}

/// Date descending, undated after all dated.
fn newest_first(a: &ArticleMeta, b: &ArticleMeta) -> Ordering {
    match (a.date, b.date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Count values case-insensitively, once per article.
///
/// Sorted by count descending, then name ascending (case-insensitive).
fn count_facets<'a>(per_article: impl Iterator<Item = Vec<&'a str>>) -> Vec<FacetCount> {
    let mut facets: Vec<FacetCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for values in per_article {
        let mut seen_here: Vec<String> = Vec::new();
        for value in values {
            let key = value.to_lowercase();
            if seen_here.contains(&key) {
                continue;
            }
            match positions.get(&key) {
                Some(&pos) => facets[pos].count += 1,
                None => {
                    positions.insert(key.clone(), facets.len());
                    facets.push(FacetCount {
                        name: value.to_string(),
                        count: 1,
                    });
                }
            }
            seen_here.push(key);
        }
    }

    facets.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    facets
}

// ============================================================================
// Tests
// ============================================================================
