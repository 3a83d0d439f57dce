//! Command handlers.
//!
//! Each handler queries the index and writes either plain text or JSON to the
//! given writer, so the binary and the tests share one code path.

use std::io::Write;
use std::sync::Arc;

use inkpost_content::ArticleMeta;
use inkpost_core::Error as CoreError;
use inkpost_index::{ContentIndex, FacetCount};
use serde_json::json;

use crate::cli::Command;
use crate::error::Result;

/// Output options shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Emit JSON instead of text.
    pub json: bool,
    /// Related items carried by `show` and the `related` default.
    pub related_limit: usize,
}

/// Run one command against a loaded index.
///
/// # Errors
///
/// Returns a not-found error for unknown slugs, or an output error if writing
/// fails.
pub fn run(
    command: &Command,
    index: &ContentIndex,
    options: OutputOptions,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::List => write_articles(out, &index.list_all(), options.json),
        Command::Category { name } => {
            write_articles(out, &index.list_by_category(name), options.json)
        }
        Command::Tag { name } => write_articles(out, &index.list_by_tag(name), options.json),
        Command::Show { slug } => cmd_show(index, slug, options, out),
        Command::Related { slug, limit } => {
            let limit = limit.unwrap_or(options.related_limit);
            cmd_related(index, slug, limit, options.json, out)
        }
        Command::Categories => write_facets(out, &index.categories(), options.json),
        Command::Tags => write_facets(out, &index.tags(), options.json),
    }
}

fn not_found(slug: &str) -> CoreError {
    CoreError::not_found(slug, "article")
}

fn cmd_show(
    index: &ContentIndex,
    slug: &str,
    options: OutputOptions,
    out: &mut dyn Write,
) -> Result<()> {
    let view = index
        .get_detail_with_related(slug, options.related_limit)
        .ok_or_else(|| not_found(slug))?;
    let meta = &view.article.meta;

    if options.json {
        let related: Vec<&ArticleMeta> = view.related.iter().map(AsRef::as_ref).collect();
        let value = json!({
            "meta": meta.as_ref(),
            "html": view.article.html,
            "related": related,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    writeln!(out, "{}", meta.title)?;
    if let Some(date) = meta.date {
        writeln!(out, "Date:     {date}")?;
    }
    if let Some(category) = &meta.category {
        writeln!(out, "Category: {category}")?;
    }
    if !meta.tags.is_empty() {
        writeln!(out, "Tags:     {}", meta.tags.join(", "))?;
    }
    writeln!(out)?;
    write!(out, "{}", view.article.html)?;

    if !view.related.is_empty() {
        writeln!(out)?;
        writeln!(out, "Related:")?;
        for related in &view.related {
            writeln!(out, "  {related}")?;
        }
    }
    Ok(())
}

fn cmd_related(
    index: &ContentIndex,
    slug: &str,
    limit: usize,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let snapshot = index.snapshot();
    let meta = snapshot.get(slug).ok_or_else(|| not_found(slug))?;
    let related = snapshot.related(meta.category.as_deref(), slug, limit);
    write_articles(out, &related, json)
}

fn write_articles(out: &mut dyn Write, articles: &[Arc<ArticleMeta>], json: bool) -> Result<()> {
    if json {
        let list: Vec<&ArticleMeta> = articles.iter().map(AsRef::as_ref).collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&list)?)?;
        return Ok(());
    }

    for meta in articles {
        let date = meta
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".repeat(10));
        writeln!(out, "{date}  {:<24}  {}", meta.slug, meta.title)?;
    }
    Ok(())
}

fn write_facets(out: &mut dyn Write, facets: &[FacetCount], json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(facets)?)?;
        return Ok(());
    }

    for facet in facets {
        writeln!(out, "{:>4}  {}", facet.count, facet.name)?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
